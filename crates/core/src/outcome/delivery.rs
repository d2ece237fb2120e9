//! Delivery status calculation

use reportlink_domain::{DeliveryStatus, HistoryBody};

/// Derive the delivery state from one history snapshot.
///
/// First match wins:
/// 1. any error reported -> `Error`
/// 2. no destinations planned (count zero or absent) -> `Received`
/// 3. any destination with unsent items -> `Processing`
/// 4. otherwise -> `Processed`
pub fn calculate_delivery_status(history: &HistoryBody) -> DeliveryStatus {
    if history.error_count > 0 {
        return DeliveryStatus::Error;
    }

    if history.destination_count.unwrap_or(0) == 0 {
        return DeliveryStatus::Received;
    }

    if history.destinations.iter().any(|destination| !destination.is_delivered()) {
        DeliveryStatus::Processing
    } else {
        DeliveryStatus::Processed
    }
}

#[cfg(test)]
mod tests {
    use reportlink_domain::Destination;
    use serde_json::json;

    use super::*;

    fn destination(item_count: u64, sent: usize) -> Destination {
        Destination { item_count, sent_reports: Some(vec![json!({}); sent]) }
    }

    fn history(destination_count: Option<u64>, destinations: Vec<Destination>) -> HistoryBody {
        HistoryBody { destination_count, destinations, ..HistoryBody::default() }
    }

    #[test]
    fn errors_win_over_destination_data() {
        let mut body = history(Some(2), vec![destination(3, 3), destination(2, 2)]);
        body.error_count = 1;
        assert_eq!(calculate_delivery_status(&body), DeliveryStatus::Error);
    }

    #[test]
    fn no_destinations_means_received() {
        assert_eq!(calculate_delivery_status(&history(Some(0), vec![])), DeliveryStatus::Received);
        assert_eq!(calculate_delivery_status(&history(None, vec![])), DeliveryStatus::Received);
    }

    #[test]
    fn any_unsent_destination_means_processing() {
        let body = history(Some(2), vec![destination(3, 3), destination(2, 1)]);
        assert_eq!(calculate_delivery_status(&body), DeliveryStatus::Processing);

        // mismatch first must not be masked by a later match
        let body = history(Some(2), vec![destination(2, 1), destination(3, 3)]);
        assert_eq!(calculate_delivery_status(&body), DeliveryStatus::Processing);
    }

    #[test]
    fn missing_sent_reports_means_processing() {
        let body = history(Some(1), vec![Destination { item_count: 0, sent_reports: None }]);
        assert_eq!(calculate_delivery_status(&body), DeliveryStatus::Processing);
    }

    #[test]
    fn all_destinations_sent_means_processed() {
        let body = history(Some(2), vec![destination(3, 3), destination(2, 2)]);
        assert_eq!(calculate_delivery_status(&body), DeliveryStatus::Processed);
    }
}
