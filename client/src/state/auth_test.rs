use super::*;

fn student() -> User {
    User { id: 1, username: "student1".into(), name: "Ravi Kumar".into(), ..User::default() }
}

#[test]
fn default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

#[test]
fn sign_in_persists_and_sign_out_clears() {
    let mut state = AuthState::default();
    state.sign_in(student());
    assert!(!state.loading);
    assert_eq!(state.role(), Some(Role::Student));
    assert_eq!(state.user_id(), Some(1));
    assert_eq!(AuthState::restore().user, Some(student()));

    state.sign_out();
    assert!(state.user.is_none());
    assert!(AuthState::restore().user.is_none());
}

#[test]
fn fail_records_error_and_stops_loading() {
    let mut state = AuthState::default();
    state.fail("Invalid username or password");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Invalid username or password"));
}
