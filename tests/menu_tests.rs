// =====================================================
// FILE: tests/menu_tests.rs - MENU AGGREGATION
// =====================================================

use chatcmd_plugins::commands::menu::{build_menu, CategoryLabelMap, MenuContext, MenuRenderer};
use chatcmd_plugins::PluginDescriptor;
use std::collections::HashMap;

fn context() -> MenuContext {
    MenuContext {
        bot_name: "LazackDevice".into(),
        user_name: "Amani".into(),
        limit: 5,
        date: "14/10/2026".into(),
        time: "09:30:00".into(),
        uptime: "2m 5s".into(),
        total_users: 12,
        ownership: "*Official Bot:* wa.me/255700".into(),
        prefix: ".".into(),
    }
}

fn labels() -> CategoryLabelMap {
    [("main", "Information"), ("sticker", "Stickers")]
        .into_iter()
        .collect()
}

/// Command names listed in section rows, in output order.
fn listed_commands(menu: &str) -> Vec<String> {
    menu.lines()
        .filter_map(|line| line.strip_prefix("│ "))
        .filter(|row| row.starts_with("• "))
        .flat_map(|row| {
            row.split("• ")
                .map(|cell| cell.trim().to_string())
                .filter(|cell| !cell.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}

fn section_titles(menu: &str) -> Vec<String> {
    menu.lines()
        .filter_map(|line| line.strip_prefix("╭─── *"))
        .filter_map(|rest| rest.strip_suffix("* ───╮"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_scenario_two_sections_in_key_order() {
    let plugins = vec![
        PluginDescriptor::new(["sticker", "s"]).tags(["sticker"]),
        PluginDescriptor::new(["menu"]).tags(["main"]),
    ];
    let menu = build_menu(&plugins, &labels(), &context());

    assert_eq!(section_titles(&menu), vec!["Information", "Stickers"]);
    assert!(menu.contains("╭─── *Information* ───╮\n│ • menu\n╰─────────────────────╯"));
    assert!(menu.contains("╭─── *Stickers* ───╮\n│ • sticker         • s\n╰─────────────────────╯"));
}

#[test]
fn test_scenario_disabled_plugin_hidden() {
    let plugins = vec![
        PluginDescriptor::new(["secret"]).tags(["owner"]).disabled(true),
        PluginDescriptor::new(["menu"]).tags(["main"]),
    ];
    let menu = build_menu(&plugins, &labels(), &context());

    assert!(!menu.contains("secret"));
    assert_eq!(listed_commands(&menu), vec!["menu"]);
}

#[test]
fn test_scenario_untagged_plugin_uses_fallback() {
    let plugins = vec![PluginDescriptor::new(["ping"]).tags(Vec::<String>::new())];
    let menu = build_menu(&plugins, &labels(), &context());

    assert_eq!(section_titles(&menu), vec!["Other Commands"]);
    assert_eq!(listed_commands(&menu), vec!["ping"]);
}

#[test]
fn test_scenario_no_plugins_is_header_and_footer() {
    let renderer = MenuRenderer {
        labels: labels(),
        ..MenuRenderer::default()
    };
    let ctx = context();
    let menu = build_menu(&[], &labels(), &ctx);

    assert_eq!(menu, format!("{}{}", renderer.header(&ctx), renderer.footer(&ctx)));
    assert!(section_titles(&menu).is_empty());
}

#[test]
fn test_deterministic_output() {
    let plugins = vec![
        PluginDescriptor::new(["a", "b", "c"]).tags(["tools"]),
        PluginDescriptor::new(["d"]).tags(["game"]),
        PluginDescriptor::new(["e", "f"]),
    ];
    let first = build_menu(&plugins, &labels(), &context());
    let second = build_menu(&plugins, &labels(), &context());
    assert_eq!(first, second);
}

#[test]
fn test_section_order_ignores_load_order() {
    let mut plugins = vec![
        PluginDescriptor::new(["t1"]).tags(["tools"]),
        PluginDescriptor::new(["o1"]),
        PluginDescriptor::new(["g1"]).tags(["game"]),
        PluginDescriptor::new(["m1"]).tags(["main"]),
    ];
    let labels = CategoryLabelMap::default();
    let forward = build_menu(&plugins, &labels, &context());
    plugins.reverse();
    let backward = build_menu(&plugins, &labels, &context());

    // "__others__" < "game" < "main" < "tools"
    let expected = vec!["Other Commands", "Games", "Information", "Tools"];
    assert_eq!(section_titles(&forward), expected);
    assert_eq!(section_titles(&backward), expected);
}

#[test]
fn test_every_enabled_command_listed_once() {
    let json = r#"[
        {"command": ["play", "yt", "song"], "tags": ["downloader"]},
        {"command": "tiktok", "tags": ["downloader", "tools"]},
        {"command": ["kick", 7, "add"], "tags": ["group"]},
        {"command": ["ban"], "tags": ["owner"], "disabled": true},
        {"command": ["coin", "flip", "dice", "slot", "rps"], "tags": ["game"]},
        {"command": null, "tags": ["logo"]},
        {"command": ["todo"]}
    ]"#;
    let plugins = PluginDescriptor::list_from_json(json).unwrap();
    let menu = build_menu(&plugins, &CategoryLabelMap::default(), &context());

    let mut listed = listed_commands(&menu);
    listed.sort();
    let mut expected: Vec<String> = [
        "play", "yt", "song", "tiktok", "kick", "add", "coin", "flip", "dice", "slot", "rps",
        "todo",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    expected.sort();
    assert_eq!(listed, expected);
    assert!(!menu.contains("ban"));
}

#[test]
fn test_column_split_per_section() {
    let plugins = vec![
        PluginDescriptor::new(["a1", "a2", "a3", "a4", "a5"]).tags(["game"]),
        PluginDescriptor::new(["b1", "b2", "b3", "b4"]).tags(["tools"]),
    ];
    let menu = build_menu(&plugins, &CategoryLabelMap::default(), &context());

    let mut rows_per_section: HashMap<String, Vec<String>> = HashMap::new();
    let mut current = None;
    for line in menu.lines() {
        if let Some(title) = line
            .strip_prefix("╭─── *")
            .and_then(|rest| rest.strip_suffix("* ───╮"))
        {
            current = Some(title.to_string());
        } else if let (Some(title), Some(row)) = (&current, line.strip_prefix("│ • ")) {
            rows_per_section
                .entry(title.clone())
                .or_default()
                .push(row.to_string());
        }
    }

    assert_eq!(rows_per_section["Games"].len(), 3);
    assert_eq!(rows_per_section["Tools"].len(), 2);
    assert!(rows_per_section["Games"][0].starts_with("a1"));
    assert!(rows_per_section["Games"][0].ends_with("• a4"));
    assert_eq!(rows_per_section["Games"][2].trim_end(), "a3");
    assert!(rows_per_section["Tools"][1].ends_with("• b4"));
}

#[test]
fn test_later_tags_do_not_create_sections() {
    let plugins = vec![PluginDescriptor::new(["system"]).tags(["main", "tools", "owner"])];
    let menu = build_menu(&plugins, &labels(), &context());
    assert_eq!(section_titles(&menu), vec!["Information"]);
}

#[test]
fn test_header_passes_context_through() {
    let menu = build_menu(&[], &labels(), &context());
    assert!(menu.starts_with("╭─◇ *LAZACKDEVICE* ◇─╮"));
    assert!(menu.contains("│ *User:* Amani"));
    assert!(menu.contains("│ *Limit:* 5"));
    assert!(menu.contains("│ *Date:* 14/10/2026"));
    assert!(menu.contains("│ *Time:* 09:30:00"));
    assert!(menu.contains("│ *Uptime:* 2m 5s"));
    assert!(menu.contains("│ *Users:* 12"));
    assert!(menu.contains("│ *Official Bot:* wa.me/255700"));
    assert!(menu.ends_with("*Thank you for using LazackDevice!*"));
}
