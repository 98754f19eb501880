use crate::rbxmx::{IdentAllocator, sanitize_identifier};

#[test]
fn sanitizes_display_names() {
	assert_eq!(sanitize_identifier("Main Menu"), "Main_Menu");
	assert_eq!(sanitize_identifier("Close-Button!!"), "Close_Button");
	assert_eq!(sanitize_identifier("2ndPanel"), "_2ndPanel");
	assert_eq!(sanitize_identifier("end"), "end_");
	assert_eq!(sanitize_identifier("___"), "");
	assert_eq!(sanitize_identifier("★★"), "");
	assert_eq!(sanitize_identifier("snake_case"), "snake_case");
}

#[test]
fn duplicates_get_numeric_suffixes() {
	let mut idents = IdentAllocator::new();
	assert_eq!(idents.allocate(Some("Button"), "TextButton"), "Button");
	assert_eq!(idents.allocate(Some("Button"), "TextButton"), "Button_2");
	assert_eq!(idents.allocate(Some("Button"), "TextButton"), "Button_3");
}

#[test]
fn empty_names_fall_back_to_class() {
	let mut idents = IdentAllocator::new();
	assert_eq!(idents.allocate(None, "UICorner"), "uicorner");
	assert_eq!(idents.allocate(Some("!!!"), "UICorner"), "uicorner_2");
	assert_eq!(idents.allocate(None, "???"), "instance");
}

#[test]
fn never_shadows_builtins_or_reserved_names() {
	let mut idents = IdentAllocator::new();
	assert!(idents.is_taken("Instance"));
	assert_eq!(idents.allocate(Some("Instance"), "Frame"), "Instance_2");
	assert_eq!(idents.allocate(Some("game"), "Frame"), "game_2");

	let mut custom = IdentAllocator::with_reserved(["container"]);
	assert_eq!(custom.allocate(Some("container"), "Frame"), "container_2");
	custom.reserve("Panel");
	assert_eq!(custom.allocate(Some("Panel"), "Frame"), "Panel_2");
}
