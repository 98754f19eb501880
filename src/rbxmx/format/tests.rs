use crate::rbxmx::{Color3, DecodedValue, FontFace, OmitReason, UDim2, lua_number, lua_string, lua_value};

#[test]
fn strings_are_escaped() {
	assert_eq!(lua_string("plain"), "\"plain\"");
	assert_eq!(lua_string("say \"hi\"\\now"), r#""say \"hi\"\\now""#);
	assert_eq!(lua_string("a\nb\tc\r"), r#""a\nb\tc\r""#);
	assert_eq!(lua_string("bell\u{7}"), r#""bell\007""#);
	assert_eq!(lua_string("héllo"), "\"héllo\"");
}

#[test]
fn numbers_drop_redundant_fraction() {
	assert_eq!(lua_number(3.0), "3");
	assert_eq!(lua_number(-0.0), "0");
	assert_eq!(lua_number(0.25), "0.25");
	assert_eq!(lua_number(-12.5), "-12.5");
	assert_eq!(lua_number(f64::INFINITY), "math.huge");
	assert_eq!(lua_number(f64::NEG_INFINITY), "-math.huge");
	assert_eq!(lua_number(f64::NAN), "0/0");
}

#[test]
fn colours_prefer_byte_form() {
	assert_eq!(lua_value(&DecodedValue::Color(Color3::from_packed(0xFF8040))).as_deref(), Some("Color3.fromRGB(255, 128, 64)"));
	assert_eq!(
		lua_value(&DecodedValue::Color(Color3 { r: 0.3, g: 0.0, b: 1.0 })).as_deref(),
		Some("Color3.new(0.3, 0, 1)")
	);
}

#[test]
fn composite_values() {
	assert_eq!(lua_value(&DecodedValue::UDim2(UDim2::new(0.5, -10.0, 1.0, 0.0))).as_deref(), Some("UDim2.new(0.5, -10, 1, 0)"));
	assert_eq!(lua_value(&DecodedValue::NumberRange { min: 1.0, max: 2.5 }).as_deref(), Some("NumberRange.new(1, 2.5)"));
	assert_eq!(lua_value(&DecodedValue::NumberSequence(0.5)).as_deref(), Some("NumberSequence.new(0.5)"));
	assert_eq!(
		lua_value(&DecodedValue::ColorSequence(Color3::WHITE)).as_deref(),
		Some("ColorSequence.new(Color3.fromRGB(255, 255, 255))")
	);
	assert_eq!(lua_value(&DecodedValue::BrickColor(194)).as_deref(), Some("BrickColor.new(194)"));
	assert_eq!(lua_value(&DecodedValue::ContentRef("rbxassetid://1".into())).as_deref(), Some("\"rbxassetid://1\""));
}

#[test]
fn enum_tokens_fall_back_to_raw_number() {
	let resolved = DecodedValue::EnumToken {
		raw: 1,
		resolved: Some("Enum.TextXAlignment.Right".into()),
	};
	assert_eq!(lua_value(&resolved).as_deref(), Some("Enum.TextXAlignment.Right"));
	let raw = DecodedValue::EnumToken { raw: 17, resolved: None };
	assert_eq!(lua_value(&raw).as_deref(), Some("17"));
}

#[test]
fn fonts_guard_member_names() {
	let font = FontFace {
		family: "rbxasset://fonts/families/GothamSSm.json".into(),
		weight: "Bold".into(),
		style: "Italic".into(),
	};
	assert_eq!(
		lua_value(&DecodedValue::Font(font)).as_deref(),
		Some("Font.new(\"rbxasset://fonts/families/GothamSSm.json\", Enum.FontWeight.Bold, Enum.FontStyle.Italic)")
	);

	let odd = FontFace {
		family: "x".into(),
		weight: "Extra Bold".into(),
		style: "".into(),
	};
	assert_eq!(
		lua_value(&DecodedValue::Font(odd)).as_deref(),
		Some("Font.new(\"x\", Enum.FontWeight.Regular, Enum.FontStyle.Normal)")
	);
}

#[test]
fn omitted_values_render_nothing() {
	assert_eq!(lua_value(&DecodedValue::Omitted(OmitReason::NullReference)), None);
	assert_eq!(lua_value(&DecodedValue::Omitted(OmitReason::Excluded)), None);
}
