use crate::rbxmx::{
	AnchorPreset, CONTAINER_VAR, ConversionConfig, DecodedValue, DestroyKey, Document, Emitter, EmitterState, EnumTable, Layout, Node,
	SCREEN_GUI_VAR, UDim2, compute_bounds, parse_document,
};

const PANEL: &str = r#"<roblox version="4">
	<Item class="Frame" referent="RBX1">
		<Properties>
			<string name="Name">Panel</string>
			<bool name="Archivable">true</bool>
			<UDim2 name="Position"><XS>0</XS><XO>100</XO><YS>0</YS><YO>50</YO></UDim2>
			<UDim2 name="Size"><XS>0</XS><XO>200</XO><YS>0</YS><YO>100</YO></UDim2>
			<float name="BackgroundTransparency">0.2</float>
			<int name="ZIndex">99</int>
			<token name="BorderMode">2</token>
		</Properties>
		<Item class="UICorner" referent="RBX2">
			<Properties>
				<UDim name="CornerRadius"><S>0</S><O>8</O></UDim>
				<int name="ZIndex">4</int>
			</Properties>
		</Item>
		<Item class="TextLabel" referent="RBX3">
			<Properties>
				<string name="Name">Title</string>
				<UDim2 name="Position"><XS>0</XS><XO>10</XO><YS>0</YS><YO>5</YO></UDim2>
				<UDim2 name="Size"><XS>1</XS><XO>-20</XO><YS>0</YS><YO>30</YO></UDim2>
				<string name="Text">Hello "world"</string>
			</Properties>
		</Item>
		<Item class="TextLabel" referent="RBX4">
			<Properties>
				<string name="Name">Title</string>
				<UDim2 name="Size"><XS>0</XS><XO>10</XO><YS>0</YS><YO>10</YO></UDim2>
				<Ref name="NextSelectionUp">null</Ref>
			</Properties>
		</Item>
	</Item>
</roblox>"#;

fn emit(xml: &str, config: &ConversionConfig) -> String {
	let document = parse_document(xml, EnumTable::builtin(), config.max_depth).expect("parse");
	let layout = Layout::new(compute_bounds(&document, config.bounds_scope), config.scale, config.position);
	Emitter::new(config, layout).emit_document(&document)
}

fn line_index(source: &str, line: &str) -> usize {
	source
		.lines()
		.position(|candidate| candidate.trim_start() == line)
		.unwrap_or_else(|| panic!("missing line {line:?} in:\n{source}"))
}

#[test]
fn preamble_builds_screen_gui_and_container() {
	let source = emit(PANEL, &ConversionConfig::default());
	assert!(source.starts_with("-- Generated by rbxlua"));
	assert!(source.contains("local playerGui = player:WaitForChild(\"PlayerGui\")"));
	assert!(source.contains(&format!("local {SCREEN_GUI_VAR} = Instance.new(\"ScreenGui\")")));
	assert!(source.contains("screenGui.Name = \"ConvertedGui\""));
	assert!(source.contains("screenGui.ResetOnSpawn = false"));
	assert!(source.contains(&format!("{CONTAINER_VAR}.AnchorPoint = Vector2.new(0.5, 0.5)")));
	assert!(source.contains("container.Position = UDim2.new(0.5, 0, 0.5, 0)"));
	assert!(source.contains("container.Size = UDim2.new(0, 200, 0, 100)"));
	assert!(!source.contains("container.Active"));
	assert!(source.ends_with('\n'));
}

#[test]
fn statements_follow_creation_then_properties_then_parent() {
	let source = emit(PANEL, &ConversionConfig::default());
	let created = line_index(&source, "local Panel = Instance.new(\"Frame\")");
	let named = line_index(&source, "Panel.Name = \"Panel\"");
	let parented = line_index(&source, "Panel.Parent = container");
	let child = line_index(&source, "local Title = Instance.new(\"TextLabel\")");
	let child_parented = line_index(&source, "Title.Parent = Panel");
	assert!(created < named && named < parented && parented < child && child < child_parented);
	assert!(line_index(&source, "container.Parent = screenGui") < created);
}

#[test]
fn duplicate_names_get_distinct_locals() {
	let source = emit(PANEL, &ConversionConfig::default());
	assert!(source.contains("local Title_2 = Instance.new(\"TextLabel\")"));
	assert!(source.contains("Title_2.Parent = Panel"));
	assert!(source.contains("local uicorner = Instance.new(\"UICorner\")"));
}

#[test]
fn top_level_position_is_normalized_and_children_are_scaled() {
	let config = ConversionConfig {
		scale: 2.0,
		..ConversionConfig::default()
	};
	let source = emit(PANEL, &config);
	assert!(source.contains("Panel.Position = UDim2.new(0, 0, 0, 0)"));
	assert!(source.contains("Panel.Size = UDim2.new(0, 400, 0, 200)"));
	assert!(source.contains("Title.Position = UDim2.new(0, 20, 0, 10)"));
	assert!(source.contains("Title.Size = UDim2.new(1, -40, 0, 60)"));
	assert!(source.contains("uicorner.CornerRadius = UDim.new(0, 16)"));
	assert!(source.contains("container.Size = UDim2.new(0, 400, 0, 200)"));
}

#[test]
fn draw_order_replaces_document_z_index() {
	let source = emit(PANEL, &ConversionConfig::default());
	assert!(source.contains("Panel.ZIndex = 1"));
	assert!(source.contains("Title.ZIndex = 2"));
	assert!(source.contains("Title_2.ZIndex = 3"));
	assert!(!source.contains("ZIndex = 99"));
	assert!(source.contains("uicorner.ZIndex = 4"));
	assert_eq!(source.matches("Panel.ZIndex").count(), 1);
}

#[test]
fn omitted_properties_produce_no_assignment() {
	let source = emit(PANEL, &ConversionConfig::default());
	assert!(!source.contains("Archivable"));
	assert!(!source.contains("NextSelectionUp"));
	assert!(source.contains("Panel.BorderMode = Enum.BorderMode.Inset"));
	assert!(source.contains("Title.Text = \"Hello \\\"world\\\"\""));
}

#[test]
fn transparency_override_replaces_existing_values_only() {
	let config = ConversionConfig {
		transparency_override: Some(0.5),
		..ConversionConfig::default()
	};
	let source = emit(PANEL, &config);
	assert!(source.contains("Panel.BackgroundTransparency = 0.5"));
	assert!(!source.contains("0.2"));
	assert!(!source.contains("Title.BackgroundTransparency"));
}

#[test]
fn missing_position_is_synthesized_relative_to_bounds() {
	let xml = r#"<roblox>
		<Item class="Frame"><Properties>
			<string name="Name">A</string>
			<UDim2 name="Position"><XO>-50</XO><YO>-20</YO></UDim2>
			<UDim2 name="Size"><XO>10</XO><YO>10</YO></UDim2>
		</Properties></Item>
		<Item class="Frame"><Properties>
			<string name="Name">B</string>
			<UDim2 name="Size"><XO>10</XO><YO>10</YO></UDim2>
		</Properties></Item>
	</roblox>"#;
	let source = emit(xml, &ConversionConfig::default());
	assert!(source.contains("A.Position = UDim2.new(0, 0, 0, 0)"));
	assert!(source.contains("B.Position = UDim2.new(0, 50, 0, 20)"));
	assert!(source.contains("container.Size = UDim2.new(0, 60, 0, 30)"));
}

#[test]
fn original_preset_keeps_document_origin() {
	let config = ConversionConfig {
		position: AnchorPreset::Original,
		..ConversionConfig::default()
	};
	let source = emit(PANEL, &config);
	assert!(source.contains("container.AnchorPoint = Vector2.new(0, 0)"));
	assert!(source.contains("container.Position = UDim2.new(0, 100, 0, 50)"));
}

#[test]
fn behaviour_blocks_are_opt_in() {
	let plain = emit(PANEL, &ConversionConfig::default());
	assert!(!plain.contains("UserInputService"));

	let config = ConversionConfig {
		draggable: true,
		destroy_key: DestroyKey::X,
		..ConversionConfig::default()
	};
	let source = emit(PANEL, &config);
	assert!(source.contains("container.Active = true"));
	assert_eq!(source.matches("game:GetService(\"UserInputService\")").count(), 1);
	assert!(source.contains("container.InputBegan:Connect(function(input)"));
	assert!(source.contains("UserInputService.InputChanged:Connect(function(input)"));
	assert!(source.contains("\tif input.KeyCode == Enum.KeyCode.X then"));
	assert!(source.contains("\t\tscreenGui:Destroy()"));
	assert!(line_index(&source, "Title_2.Parent = Panel") < line_index(&source, "-- Drag handling"));
}

#[test]
fn names_colliding_with_generated_locals_are_renamed() {
	let xml = r#"<roblox>
		<Item class="Frame"><Properties><string name="Name">container</string></Properties></Item>
		<Item class="Frame"><Properties><string name="Name">Instance</string></Properties></Item>
	</roblox>"#;
	let source = emit(xml, &ConversionConfig::default());
	assert!(source.contains("local container_2 = Instance.new(\"Frame\")"));
	assert!(source.contains("local Instance_2 = Instance.new(\"Frame\")"));
}

#[test]
fn non_identifier_property_names_use_brackets() {
	let xml = r#"<roblox><Item class="Frame"><Properties>
		<string name="Name">P</string>
		<bool name="Odd Name">true</bool>
	</Properties></Item></roblox>"#;
	let source = emit(xml, &ConversionConfig::default());
	assert!(source.contains("P[\"Odd Name\"] = true"));
}

#[test]
fn fresh_state_has_no_lines() {
	let state = EmitterState::default();
	assert!(state.lines().is_empty());
	assert_eq!(state.finish(), "\n");
}

/// Largest number of simultaneously live `local`s, following `do`/`end` scopes.
fn max_live_locals(source: &str) -> usize {
	let mut scopes = vec![0_usize];
	let mut max = 0;
	for line in source.lines().map(str::trim_start) {
		if line == "do" {
			scopes.push(0);
		} else if line == "end" {
			scopes.pop();
		} else if line.starts_with("local ") {
			if let Some(count) = scopes.last_mut() {
				*count += 1;
			}
			max = max.max(scopes.iter().sum());
		}
	}
	max
}

fn sized(class: &str, name: &str) -> Node {
	let mut node = Node::new(class);
	node.properties.insert("Name".into(), DecodedValue::String(name.into()));
	node.properties.insert("Size".into(), DecodedValue::UDim2(UDim2::new(0.0, 100.0, 0.0, 20.0)));
	node
}

#[test]
fn each_node_is_scoped_in_its_own_block() {
	let source = emit(PANEL, &ConversionConfig::default());
	let lines: Vec<&str> = source.lines().collect();
	let panel = line_index(&source, "local Panel = Instance.new(\"Frame\")");
	assert_eq!(lines[panel - 1], "do");
	assert_eq!(lines[panel], "\tlocal Panel = Instance.new(\"Frame\")");
	assert!(source.contains("\t\tlocal Title = Instance.new(\"TextLabel\")"));
	assert!(source.contains("\t\tTitle.Parent = Panel"));
	assert_eq!(source.lines().filter(|line| line.trim_start() == "do").count(), 4);
	assert_eq!(source.lines().filter(|line| line.trim_start() == "end").count(), 4);
}

#[test]
fn wide_models_keep_live_locals_under_the_luau_limit() {
	let mut panel = sized("Frame", "Panel");
	for _ in 0..250 {
		panel.children.push(sized("TextLabel", "Label"));
	}
	let document = Document { roots: vec![panel] };
	let config = ConversionConfig::default();
	let layout = Layout::new(compute_bounds(&document, config.bounds_scope), config.scale, config.position);
	let source = Emitter::new(&config, layout).emit_document(&document);

	assert!(source.contains("local Label_250 = Instance.new(\"TextLabel\")"));
	assert_eq!(source.lines().filter(|line| line.trim_start().starts_with("local ")).count(), 256);
	assert!(max_live_locals(&source) <= 7, "live locals: {}", max_live_locals(&source));
}

#[test]
fn deep_models_only_hold_the_ancestor_chain() {
	let mut node = sized("Frame", "Leaf");
	for _ in 0..20 {
		let mut parent = sized("Frame", "Level");
		parent.children.push(node);
		node = parent;
	}
	let document = Document { roots: vec![node] };
	let config = ConversionConfig::default();
	let layout = Layout::new(compute_bounds(&document, config.bounds_scope), config.scale, config.position);
	let source = Emitter::new(&config, layout).emit_document(&document);

	assert_eq!(max_live_locals(&source), 5 + 21);
}
