//! Event cost derivation.
//!
//! The one place financial correctness matters: totals are exact decimal
//! sums of the negotiated attachment prices, never binary floating point.

use rust_decimal::Decimal;

use super::EventService;

/// Total cost of an event: the sum of `agreed_price` over its attachments.
///
/// Returns zero for an event with no attached services.
#[must_use]
pub fn total_cost(attachments: &[EventService]) -> Decimal {
    attachments.iter().map(|a| a.agreed_price).sum()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use crate::domain::{EventId, ServiceId};

    use super::*;

    fn attachment(price: Decimal) -> EventService {
        EventService {
            id: uuid::Uuid::new_v4(),
            event_id: EventId::new(),
            service_id: ServiceId::new(),
            agreed_price: price,
            notes: None,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn empty_event_costs_zero() {
        assert_eq!(total_cost(&[]), Decimal::ZERO);
    }

    #[test]
    fn sums_are_exact() {
        let attachments = vec![
            attachment(dec!(450.00)),
            attachment(dec!(0.10)),
            attachment(dec!(0.20)),
        ];
        assert_eq!(total_cost(&attachments), dec!(450.30));
    }

    #[test]
    fn repeated_addition_does_not_drift() {
        // 1000 × 0.10 must be exactly 100.00.
        let attachments: Vec<_> = (0..1000).map(|_| attachment(dec!(0.10))).collect();
        assert_eq!(total_cost(&attachments), dec!(100.00));
    }

    #[test]
    fn detaching_restores_prior_total() {
        let mut attachments = vec![attachment(dec!(450.00))];
        let before = total_cost(&attachments);

        attachments.push(attachment(dec!(120.50)));
        assert_eq!(total_cost(&attachments), dec!(570.50));

        attachments.pop();
        assert_eq!(total_cost(&attachments), before);
    }
}
