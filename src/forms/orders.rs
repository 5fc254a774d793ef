use serde::Deserialize;

use crate::domain::types::PaymentStatus;
use crate::forms::FormError;

/// Payment status selected on the order details page.
#[derive(Debug, Deserialize)]
pub struct PaymentStatusForm {
    pub status: String,
}

impl TryFrom<&PaymentStatusForm> for PaymentStatus {
    type Error = FormError;

    fn try_from(form: &PaymentStatusForm) -> Result<Self, Self::Error> {
        form.status.parse().map_err(|_| FormError::InvalidStatus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_are_accepted() {
        let form = PaymentStatusForm {
            status: "paid".to_string(),
        };
        assert_eq!(PaymentStatus::try_from(&form).unwrap(), PaymentStatus::Paid);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let form = PaymentStatusForm {
            status: "refunded".to_string(),
        };
        assert!(matches!(
            PaymentStatus::try_from(&form),
            Err(FormError::InvalidStatus)
        ));
    }
}
