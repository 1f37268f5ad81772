use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::*, str::RegexPredicate};
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command isolated from the user's config and
/// data, with --no-color and an explicit database file
fn grocer_cmd(temp_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("grocer").expect("Failed to find grocer binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.join("config"))
        .env("XDG_DATA_HOME", temp_dir.join("data"))
        .env_remove("GROCER_REMOTE__URL")
        .env_remove("GROCER_REMOTE__API_KEY")
        .env_remove("GROCER_REMOTE__ACCESS_TOKEN")
        .env_remove("GROCER_MISSED_ITEMS")
        .env_remove("GROCER_DATABASE_FILE")
        .arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.join("cli_test.db"));
    cmd
}

/// Lowercase v4 uuid, the shape of every generated id.
const UUID_PATTERN: &str = "[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}";

/// Matches `label` followed by a generated id.
fn reports_id(label: &str) -> RegexPredicate {
    predicate::str::is_match(format!("{label}{UUID_PATTERN}")).expect("Invalid id pattern")
}

fn extract_id_from_output(output: &str) -> String {
    if let Some(start) = output.find("with ID: ") {
        let id_str = &output[start + "with ID: ".len()..];
        let end = id_str
            .find(|c: char| c.is_whitespace())
            .unwrap_or(id_str.len());
        return id_str[..end].to_string();
    }

    panic!("Could not extract ID from output: {output}");
}

fn add_item(temp_dir: &Path, args: &[&str]) -> String {
    let output = grocer_cmd(temp_dir)
        .args(["item", "add"])
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8(output).expect("Invalid UTF-8");
    extract_id_from_output(&output_str)
}

#[test]
fn test_cli_add_item() {
    let temp_dir = create_cli_test_environment();

    grocer_cmd(temp_dir.path())
        .args([
            "item",
            "add",
            "Oat Milk",
            "--category",
            "drinks",
            "--aisle",
            "4",
            "--price",
            "2.5",
        ])
        .assert()
        .success()
        .stdout(reports_id("Added 'Oat Milk' with ID: "))
        .stdout(predicate::str::contains("- Category: Drinks"))
        .stdout(predicate::str::contains("- Aisle: 4"))
        .stdout(predicate::str::contains("- Price: 2.50"));
}

#[test]
fn test_cli_add_item_rejects_blank_name() {
    let temp_dir = create_cli_test_environment();

    grocer_cmd(temp_dir.path())
        .args(["item", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item name cannot be empty"));
}

#[test]
fn test_cli_add_item_rejects_unknown_category() {
    let temp_dir = create_cli_test_environment();

    grocer_cmd(temp_dir.path())
        .args(["item", "add", "Hammer", "-c", "hardware"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));
}

#[test]
fn test_cli_list_empty_inventory() {
    let temp_dir = create_cli_test_environment();

    grocer_cmd(temp_dir.path())
        .args(["item", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn test_cli_list_groups_by_category() {
    let temp_dir = create_cli_test_environment();
    add_item(temp_dir.path(), &["Soap", "-c", "personal care"]);
    add_item(temp_dir.path(), &["Bread"]);

    grocer_cmd(temp_dir.path())
        .args(["item", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Food"))
        .stdout(predicate::str::contains("## Personal Care"))
        .stdout(predicate::str::contains("Bread"))
        .stdout(predicate::str::contains("Soap"));

    grocer_cmd(temp_dir.path())
        .args(["item", "list", "--search", "BRE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bread"))
        .stdout(predicate::str::contains("Soap").not());
}

#[test]
fn test_cli_show_item_by_prefix() {
    let temp_dir = create_cli_test_environment();
    let id = add_item(temp_dir.path(), &["Coffee", "-c", "drinks"]);

    grocer_cmd(temp_dir.path())
        .args(["item", "show", &id[..10]])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Coffee"))
        .stdout(predicate::str::contains(format!("- ID: {id}")));
}

#[test]
fn test_cli_ambiguous_prefix_fails() {
    let temp_dir = create_cli_test_environment();
    // Seventeen ids over sixteen hex digits: at least two share a first character
    let mut ids: Vec<String> = (0..17)
        .map(|n| add_item(temp_dir.path(), &[format!("Item {n}").as_str()]))
        .collect();
    ids.sort();
    let shared = ids
        .windows(2)
        .find(|pair| pair[0][..1] == pair[1][..1])
        .map(|pair| pair[0][..1].to_string())
        .expect("Two ids should share a first character");

    grocer_cmd(temp_dir.path())
        .args(["item", "show", &shared])
        .assert()
        .failure()
        .stderr(predicate::str::contains("matches more than one item"));
}

#[test]
fn test_cli_show_missing_item() {
    let temp_dir = create_cli_test_environment();

    grocer_cmd(temp_dir.path())
        .args(["item", "show", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_update_item() {
    let temp_dir = create_cli_test_environment();
    let id = add_item(temp_dir.path(), &["Rice", "-a", "9"]);

    grocer_cmd(temp_dir.path())
        .args(["item", "update", &id, "--name", "Basmati Rice", "-a", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated item with ID:"))
        .stdout(predicate::str::contains("Renamed to Basmati Rice"))
        .stdout(predicate::str::contains("Cleared aisle"))
        .stdout(predicate::str::contains("- Aisle:").not());
}

#[test]
fn test_cli_update_without_changes_fails() {
    let temp_dir = create_cli_test_environment();
    let id = add_item(temp_dir.path(), &["Rice"]);

    grocer_cmd(temp_dir.path())
        .args(["item", "update", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes specified"));
}

#[test]
fn test_cli_delete_item() {
    let temp_dir = create_cli_test_environment();
    let id = add_item(temp_dir.path(), &["Crackers"]);

    grocer_cmd(temp_dir.path())
        .args(["item", "rm", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted item 'Crackers'"));

    grocer_cmd(temp_dir.path())
        .args(["item", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_need_and_unneed() {
    let temp_dir = create_cli_test_environment();
    let id = add_item(temp_dir.path(), &["Eggs"]);

    grocer_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Your shopping list is empty."));

    grocer_cmd(temp_dir.path())
        .args(["item", "need", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Eggs' is on the shopping list"));

    grocer_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Shopping list (1 item)"))
        .stdout(predicate::str::contains("- Eggs"));

    grocer_cmd(temp_dir.path())
        .args(["item", "unneed", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Eggs' is off the shopping list"));
}

#[test]
fn test_cli_overview_shows_first_five() {
    let temp_dir = create_cli_test_environment();
    for name in ["A", "B", "C", "D", "E", "F", "G"] {
        add_item(temp_dir.path(), &[name, "--need"]);
    }

    grocer_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Shopping list (7 items)"))
        .stdout(predicate::str::contains("- ...and 2 more"));
}

#[test]
fn test_cli_shop_list_in_aisle_order() {
    let temp_dir = create_cli_test_environment();
    add_item(temp_dir.path(), &["Frozen Peas", "-a", "10", "--need"]);
    add_item(temp_dir.path(), &["Lettuce", "-a", "2", "--need"]);
    add_item(temp_dir.path(), &["Mystery", "--need"]);
    add_item(temp_dir.path(), &["Batteries", "-a", "1"]);

    let output = grocer_cmd(temp_dir.path())
        .args(["shop", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Shopping (0/3 in cart, 0%)"))
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8(output).expect("Invalid UTF-8");
    let lettuce = output_str.find("Lettuce").unwrap();
    let peas = output_str.find("Frozen Peas").unwrap();
    let mystery = output_str.find("Mystery").unwrap();
    assert!(lettuce < peas && peas < mystery);
    assert!(!output_str.contains("Batteries"));
}

#[test]
fn test_cli_shop_with_empty_list() {
    let temp_dir = create_cli_test_environment();
    add_item(temp_dir.path(), &["Flour"]);

    grocer_cmd(temp_dir.path())
        .args(["shop", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your shopping list is empty."));
}

#[test]
fn test_cli_shop_toggle() {
    let temp_dir = create_cli_test_environment();
    let milk = add_item(temp_dir.path(), &["Milk", "--need"]);
    add_item(temp_dir.path(), &["Bread", "--need"]);

    grocer_cmd(temp_dir.path())
        .args(["shop", "toggle", &milk])
        .assert()
        .success()
        .stdout(predicate::str::contains("Picked up 'Milk'"))
        .stdout(predicate::str::contains("# Shopping (1/2 in cart, 50%)"));

    // Cart state persists between invocations
    grocer_cmd(temp_dir.path())
        .args(["shop", "t", &milk])
        .assert()
        .success()
        .stdout(predicate::str::contains("Put back 'Milk'"))
        .stdout(predicate::str::contains("# Shopping (0/2 in cart, 0%)"));
}

#[test]
fn test_cli_toggle_item_not_on_list() {
    let temp_dir = create_cli_test_environment();
    add_item(temp_dir.path(), &["Milk", "--need"]);
    let salt = add_item(temp_dir.path(), &["Salt"]);

    grocer_cmd(temp_dir.path())
        .args(["shop", "toggle", &salt])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not on the shopping list"));
}

#[test]
fn test_cli_finish_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    add_item(temp_dir.path(), &["Milk", "--need"]);

    grocer_cmd(temp_dir.path())
        .args(["shop", "finish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be confirmed"));

    grocer_cmd(temp_dir.path())
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shopping history yet."));
}

#[test]
fn test_cli_full_trip() {
    let temp_dir = create_cli_test_environment();
    let milk = add_item(temp_dir.path(), &["Milk", "-a", "1", "--need"]);
    add_item(temp_dir.path(), &["Bread", "-a", "2", "--need"]);

    grocer_cmd(temp_dir.path())
        .args(["shop", "toggle", &milk])
        .assert()
        .success();

    grocer_cmd(temp_dir.path())
        .args(["shop", "finish", "--confirm"])
        .assert()
        .success()
        .stdout(reports_id("Trip recorded with ID: "))
        .stdout(predicate::str::contains("(1 purchased, 1 missed)"));

    // Missed items carry over by default
    grocer_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Shopping list (1 item)"))
        .stdout(predicate::str::contains("- Bread"));

    grocer_cmd(temp_dir.path())
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 trip recorded"))
        .stdout(predicate::str::contains("- Milk (aisle 1)"));
}

#[test]
fn test_cli_finish_with_reset_policy() {
    let temp_dir = create_cli_test_environment();
    add_item(temp_dir.path(), &["Bread", "--need"]);

    grocer_cmd(temp_dir.path())
        .args(["--missed-items", "reset", "shop", "finish", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 purchased, 1 missed)"));

    grocer_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Your shopping list is empty."));
}

#[test]
fn test_cli_missed_policy_from_environment() {
    let temp_dir = create_cli_test_environment();
    add_item(temp_dir.path(), &["Bread", "--need"]);

    grocer_cmd(temp_dir.path())
        .env("GROCER_MISSED_ITEMS", "reset")
        .args(["shop", "finish", "--confirm"])
        .assert()
        .success();

    grocer_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Your shopping list is empty."));
}

#[test]
fn test_cli_clear_history() {
    let temp_dir = create_cli_test_environment();
    add_item(temp_dir.path(), &["Milk", "--need"]);

    grocer_cmd(temp_dir.path())
        .args(["shop", "finish", "--confirm"])
        .assert()
        .success();

    grocer_cmd(temp_dir.path())
        .args(["history", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be confirmed"));

    grocer_cmd(temp_dir.path())
        .args(["history", "clear", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Shopping history cleared"));

    grocer_cmd(temp_dir.path())
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shopping history yet."));
}

#[test]
fn test_cli_migrate_without_remote_fails() {
    let temp_dir = create_cli_test_environment();

    grocer_cmd(temp_dir.path())
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No remote store configured"));
}

#[test]
fn test_cli_signed_in_without_endpoint_fails() {
    let temp_dir = create_cli_test_environment();

    grocer_cmd(temp_dir.path())
        .env("GROCER_REMOTE__ACCESS_TOKEN", "token")
        .args(["item", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize grocer"));
}
