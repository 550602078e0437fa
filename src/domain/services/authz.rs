use crate::domain::models::{offer::Offer, user::{User, UserRole}};
use crate::error::AppError;

/// Single capability check at the engine boundary: the caller either holds
/// the required role or the request is denied.
pub fn require_role(user: &User, role: UserRole) -> Result<(), AppError> {
    if user.has_role(role) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "Requires role '{}'",
            role.as_str()
        )))
    }
}

/// Ownership check for decisions and slot publishing on an offer.
pub fn require_offer_owner(offer: &Offer, caller_id: &str) -> Result<(), AppError> {
    if offer.tutor_id == caller_id {
        Ok(())
    } else {
        Err(AppError::Forbidden("Not your offer".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User::new("A".into(), "B".into(), "a@b.c".into(), "h".into(), role)
    }

    #[test]
    fn role_check_allows_and_denies() {
        assert!(require_role(&user(UserRole::Student), UserRole::Student).is_ok());
        assert!(matches!(
            require_role(&user(UserRole::Tutor), UserRole::Student),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn ownership_check() {
        let tutor = user(UserRole::Tutor);
        let offer = Offer::new(tutor.id.clone(), "Maths".into(), None, 30.0);
        assert!(require_offer_owner(&offer, &tutor.id).is_ok());
        assert!(matches!(
            require_offer_owner(&offer, "someone-else"),
            Err(AppError::Forbidden(_))
        ));
    }
}
