// Reconciliation of device listings

use crate::domain::DeviceId;
use std::collections::HashSet;

/// Registered devices that are not currently active
///
/// Order-preserving filter over `all`: duplicates in `all` survive, and entries of
/// `active` missing from `all` are ignored.
pub fn reconcile(active: &[DeviceId], all: &[DeviceId]) -> Vec<DeviceId> {
    let active: HashSet<&DeviceId> = active.iter().collect();

    all.iter()
        .filter(|device| !active.contains(device))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<DeviceId> {
        values.iter().map(|v| DeviceId::from(*v)).collect()
    }

    #[test]
    fn test_reconcile_basic() {
        let disconnected = reconcile(&ids(&["COM3"]), &ids(&["COM3", "COM5"]));
        assert_eq!(disconnected, ids(&["COM5"]));
    }

    #[test]
    fn test_reconcile_empty_all() {
        assert!(reconcile(&ids(&["COM3", "COM5"]), &[]).is_empty());
        assert!(reconcile(&[], &[]).is_empty());
    }

    #[test]
    fn test_reconcile_empty_active_returns_all() {
        let all = ids(&["COM9", "COM1", "COM9"]);
        assert_eq!(reconcile(&[], &all), all);
    }

    #[test]
    fn test_reconcile_is_exact_match() {
        // No case folding or trimming
        let disconnected = reconcile(&ids(&["com3", "COM5 "]), &ids(&["COM3", "COM5"]));
        assert_eq!(disconnected, ids(&["COM3", "COM5"]));
    }

    #[test]
    fn test_reconcile_keeps_order_and_duplicates() {
        let active = ids(&["B", "X"]);
        let all = ids(&["D", "B", "A", "D", "C"]);
        assert_eq!(reconcile(&active, &all), ids(&["D", "A", "D", "C"]));
    }

    #[test]
    fn test_reconcile_result_is_ordered_subsequence_excluding_active() {
        let cases: Vec<(Vec<DeviceId>, Vec<DeviceId>)> = vec![
            (ids(&["a", "c"]), ids(&["a", "b", "c", "d", "b"])),
            (ids(&["z"]), ids(&["x", "y"])),
            (ids(&["x", "y"]), ids(&["x", "y"])),
        ];

        for (active, all) in cases {
            let result = reconcile(&active, &all);

            assert!(result.iter().all(|d| !active.contains(d)));

            // Subsequence check: walk `all` consuming `result` in order
            let mut remaining = result.iter().peekable();
            for device in &all {
                if remaining.peek() == Some(&device) {
                    remaining.next();
                }
            }
            assert!(remaining.peek().is_none());
        }
    }
}
