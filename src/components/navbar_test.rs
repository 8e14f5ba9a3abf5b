use super::*;

#[test]
fn avatar_initial_uppercases_first_letter() {
    assert_eq!(avatar_initial("selam tesfaye"), "S");
    assert_eq!(avatar_initial("  élise"), "É");
}

#[test]
fn avatar_initial_falls_back_for_blank_names() {
    assert_eq!(avatar_initial(""), "U");
    assert_eq!(avatar_initial("   "), "U");
}
