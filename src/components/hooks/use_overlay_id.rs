use std::sync::atomic::{AtomicU32, Ordering};

const NAMESPACE: &str = "kpds";

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// DOM id shared by an overlay and the element that controls it, e.g. `kpds-dialog-3`.
pub fn use_overlay_id(kind: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{NAMESPACE}-{kind}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_namespaced() {
        let first = use_overlay_id("dialog");
        let second = use_overlay_id("dialog");
        assert_ne!(first, second);
        assert!(first.starts_with("kpds-dialog-"));
    }
}
