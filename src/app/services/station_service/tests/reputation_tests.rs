//! Tests for the reputation pass-throughs on the service façade

use super::*;
use crate::app::stores::UserStore;
use crate::error::Error;

#[test]
fn test_increase_never_exceeds_ceiling() {
    let (service, _, users) = create_service();
    let user_id = seed_user(&users, 1, 3);

    assert_eq!(service.increase_user_reputation(user_id).unwrap(), 4);
    assert_eq!(service.increase_user_reputation(user_id).unwrap(), 5);
    for _ in 0..5 {
        assert_eq!(service.increase_user_reputation(user_id).unwrap(), 5);
    }
    assert_eq!(users.get(user_id).unwrap().reputation, 5);
}

#[test]
fn test_decrease_never_drops_below_floor() {
    let (service, _, users) = create_service();
    let user_id = seed_user(&users, 1, -3);

    assert_eq!(service.decrease_user_reputation(user_id).unwrap(), -4);
    assert_eq!(service.decrease_user_reputation(user_id).unwrap(), -5);
    for _ in 0..5 {
        assert_eq!(service.decrease_user_reputation(user_id).unwrap(), -5);
    }
    assert_eq!(users.get(user_id).unwrap().reputation, -5);
}

#[test]
fn test_invalid_user_ids_rejected() {
    let (service, _, users) = create_service();
    seed_user(&users, 1, 0);

    assert!(matches!(
        service.increase_user_reputation(-1),
        Err(Error::InvalidUser { .. })
    ));
    assert!(matches!(
        service.decrease_user_reputation(-1),
        Err(Error::InvalidUser { .. })
    ));
    assert!(service.increase_user_reputation(99).is_err());
    assert!(service.decrease_user_reputation(99).is_err());
}
