/// Local bound to `UserInputService` when any behaviour block is emitted.
pub const INPUT_SERVICE_VAR: &str = "UserInputService";

/// Locals owned by the drag block.
pub const DRAG_LOCALS: [&str; 3] = ["dragging", "dragStart", "startPos"];

/// Service lookup line shared by every behaviour block.
pub fn input_service_line() -> String {
	format!("local {INPUT_SERVICE_VAR} = game:GetService(\"UserInputService\")")
}

/// Pointer drag handling that moves `target` by the pointer delta.
pub fn drag_block(target: &str) -> Vec<String> {
	let [dragging, drag_start, start_pos] = DRAG_LOCALS;
	vec![
		"-- Drag handling".to_owned(),
		format!("local {dragging} = false"),
		format!("local {drag_start} = nil"),
		format!("local {start_pos} = nil"),
		String::new(),
		format!("{target}.InputBegan:Connect(function(input)"),
		"\tif input.UserInputType == Enum.UserInputType.MouseButton1 or input.UserInputType == Enum.UserInputType.Touch then".to_owned(),
		format!("\t\t{dragging} = true"),
		format!("\t\t{drag_start} = input.Position"),
		format!("\t\t{start_pos} = {target}.Position"),
		"\t\tinput.Changed:Connect(function()".to_owned(),
		"\t\t\tif input.UserInputState == Enum.UserInputState.End then".to_owned(),
		format!("\t\t\t\t{dragging} = false"),
		"\t\t\tend".to_owned(),
		"\t\tend)".to_owned(),
		"\tend".to_owned(),
		"end)".to_owned(),
		String::new(),
		format!("{INPUT_SERVICE_VAR}.InputChanged:Connect(function(input)"),
		format!(
			"\tif {dragging} and (input.UserInputType == Enum.UserInputType.MouseMovement or input.UserInputType == Enum.UserInputType.Touch) then"
		),
		format!("\t\tlocal delta = input.Position - {drag_start}"),
		format!(
			"\t\t{target}.Position = UDim2.new({start_pos}.X.Scale, {start_pos}.X.Offset + delta.X, {start_pos}.Y.Scale, {start_pos}.Y.Offset + delta.Y)"
		),
		"\tend".to_owned(),
		"end)".to_owned(),
	]
}

/// Key handler that destroys `target` on an unconsumed press of `key_code`.
pub fn destroy_key_block(key_code: &str, target: &str) -> Vec<String> {
	vec![
		format!("-- Press {key_code} to close"),
		format!("{INPUT_SERVICE_VAR}.InputBegan:Connect(function(input, gameProcessed)"),
		"\tif gameProcessed then".to_owned(),
		"\t\treturn".to_owned(),
		"\tend".to_owned(),
		format!("\tif input.KeyCode == Enum.KeyCode.{key_code} then"),
		format!("\t\t{target}:Destroy()"),
		"\tend".to_owned(),
		"end)".to_owned(),
	]
}
