use super::*;

#[test]
fn json_round_trip_and_remove() {
    save_json("storage_test_pair", &(3_u32, "three".to_owned()));
    assert_eq!(load_json::<(u32, String)>("storage_test_pair"), Some((3, "three".to_owned())));
    remove("storage_test_pair");
    assert_eq!(load_json::<(u32, String)>("storage_test_pair"), None);
}

#[test]
fn unparseable_json_loads_as_none() {
    save_raw("storage_test_bad", "{not json");
    assert_eq!(load_json::<u32>("storage_test_bad"), None);
    assert_eq!(load_raw("storage_test_bad").as_deref(), Some("{not json"));
}
