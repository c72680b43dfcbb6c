use super::*;

#[test]
fn each_role_has_its_own_menu() {
    assert_eq!(nav_items(Role::Student).len(), 4);
    assert!(nav_items(Role::Admin).iter().any(|i| i.path == "/admin/settings"));
    assert!(nav_items(Role::Student).iter().all(|i| i.path.starts_with("/student/")));
}

#[test]
fn dashboard_is_active_on_section_root() {
    assert!(is_active("/admin/dashboard", "/admin"));
    assert!(is_active("/admin/dashboard", "/admin/dashboard/"));
    assert!(!is_active("/admin/students", "/admin"));
    assert!(is_active("/student/profile", "/student/profile"));
    assert!(!is_active("/student/profile", "/student/payment-history"));
}
