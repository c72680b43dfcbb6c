use super::*;

#[test]
fn dismiss_leaves_newer_notice() {
    let shown = Notice::success("Payment successful");
    let mut slot = Some(Notice::error("Fee not found"));
    dismiss_if_current(&mut slot, &shown);
    assert_eq!(slot, Some(Notice::error("Fee not found")));

    let mut slot = Some(shown.clone());
    dismiss_if_current(&mut slot, &shown);
    assert_eq!(slot, None);
}

#[test]
fn kinds_map_to_bootstrap_classes() {
    assert_eq!(Notice::error("x").kind.class(), "alert alert-danger alert-dismissible");
    assert_eq!(Notice::info("x").kind, AlertKind::Info);
}
