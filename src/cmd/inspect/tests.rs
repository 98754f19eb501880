use rbxlua::rbxmx::{Color3, DecodedValue, OmitReason};

use super::describe_value;

#[test]
fn present_values_show_kind_and_literal() {
	assert_eq!(describe_value(&DecodedValue::Bool(true)), "bool = true");
	assert_eq!(
		describe_value(&DecodedValue::Color(Color3::from_packed(0x00FF00))),
		"color = Color3.fromRGB(0, 255, 0)"
	);
}

#[test]
fn omitted_values_show_reason() {
	assert_eq!(describe_value(&DecodedValue::Omitted(OmitReason::Excluded)), "<omitted: excluded>");
	assert_eq!(
		describe_value(&DecodedValue::Omitted(OmitReason::Unsupported {
			tag: "CoordinateFrame".into()
		})),
		"<omitted: unsupported CoordinateFrame>"
	);
}
