//! Command-line argument definitions using clap
//!
//! Argument structs carry the clap derives and convert into the framework-free
//! parameter types of `grocer_core::params` with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use grocer_core::{models::MissedItemPolicy, params::*};

/// Grocery list and shopping trip tracker
///
/// Keep an inventory of the things you buy, put them on a shopping list,
/// walk the store aisle by aisle ticking items into the cart, and keep a
/// history of every trip. Running without a command shows the list.
#[derive(Parser)]
#[command(version, about, name = "grocer")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/grocer/grocer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// What to do with items still needed when a trip finishes
    #[arg(long, global = true, value_enum)]
    pub missed_items: Option<MissedItemsArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the item inventory
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Walk the shopping list in aisle order
    #[command(alias = "s")]
    Shop {
        #[command(subcommand)]
        command: ShopCommands,
    },
    /// Review or clear past trips
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Copy the local database into the configured remote store
    Migrate,
}

/// Missed item policy as accepted on the command line.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum MissedItemsArg {
    /// Missed items stay on the list for next time
    Carry,
    /// Missed items come off the list too
    Reset,
}

impl From<MissedItemsArg> for MissedItemPolicy {
    fn from(val: MissedItemsArg) -> Self {
        match val {
            MissedItemsArg::Carry => MissedItemPolicy::Carry,
            MissedItemsArg::Reset => MissedItemPolicy::Reset,
        }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to the inventory
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// List the inventory grouped by category
    #[command(aliases = ["l", "ls"])]
    List(ListItemsArgs),
    /// Show details of an item
    #[command(alias = "s")]
    Show(ItemIdArgs),
    /// Edit an item's details
    #[command(alias = "u")]
    Update(UpdateItemArgs),
    /// Delete an item permanently
    #[command(aliases = ["d", "rm"])]
    Delete(ItemIdArgs),
    /// Put an item on the shopping list
    #[command(alias = "n")]
    Need(ItemIdArgs),
    /// Take an item off the shopping list
    Unneed(ItemIdArgs),
}

#[derive(Subcommand)]
pub enum ShopCommands {
    /// Show the shopping list in aisle order with cart progress
    #[command(aliases = ["l", "ls"])]
    List,
    /// Move items into or out of the cart
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Finish the trip and record it in the history
    #[command(alias = "f")]
    Finish(FinishArgs),
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List past trips, most recent first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Delete every recorded trip
    Clear(ClearHistoryArgs),
}

/// Add a new item
#[derive(ClapArgs)]
pub struct AddItemArgs {
    /// Name of the item
    pub name: String,
    #[arg(
        short,
        long,
        help = "Category: Food, Drinks, Cleaning, Personal Care or Other (default Food)"
    )]
    pub category: Option<String>,
    #[arg(short, long, help = "Aisle label, e.g. 7 or Bakery")]
    pub aisle: Option<String>,
    #[arg(long, help = "Unit price")]
    pub price: Option<f64>,
    #[arg(long, help = "Quantity usually bought")]
    pub quantity: Option<f64>,
    #[arg(long, help = "Mark the item as a household staple")]
    pub essential: bool,
    #[arg(long, help = "Put the item straight on the shopping list")]
    pub need: bool,
}

impl From<AddItemArgs> for CreateItem {
    fn from(val: AddItemArgs) -> Self {
        CreateItem {
            name: val.name,
            category: val.category,
            aisle: val.aisle,
            price: val.price,
            quantity: val.quantity,
            essential: val.essential,
            needed: val.need,
        }
    }
}

/// List the inventory
#[derive(ClapArgs)]
pub struct ListItemsArgs {
    #[arg(short, long, help = "Only items whose name contains this text")]
    pub search: Option<String>,
    #[arg(short, long, help = "Only items in this category")]
    pub category: Option<String>,
    #[arg(long, help = "Only items on the shopping list")]
    pub needed: bool,
}

impl From<ListItemsArgs> for ListItems {
    fn from(val: ListItemsArgs) -> Self {
        ListItems {
            search: val.search,
            category: val.category,
            on_list: val.needed,
        }
    }
}

/// Arguments for commands taking a single item
#[derive(ClapArgs)]
pub struct ItemIdArgs {
    #[arg(help = "Item ID, or a unique prefix of it")]
    pub id: String,
}

impl From<ItemIdArgs> for Id {
    fn from(val: ItemIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit an item
///
/// Only the given fields change. Pass an empty aisle (`-a ""`) to clear it.
/// The list status is changed with `need` and `unneed`, not here.
#[derive(ClapArgs)]
pub struct UpdateItemArgs {
    #[arg(help = "Item ID, or a unique prefix of it")]
    pub id: String,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New category")]
    pub category: Option<String>,
    #[arg(short, long, help = "New aisle label; empty clears it")]
    pub aisle: Option<String>,
    #[arg(long, help = "New unit price")]
    pub price: Option<f64>,
    #[arg(long, help = "New quantity")]
    pub quantity: Option<f64>,
    #[arg(long, help = "Whether the item is a staple (true or false)")]
    pub essential: Option<bool>,
}

impl From<UpdateItemArgs> for UpdateItem {
    fn from(val: UpdateItemArgs) -> Self {
        UpdateItem {
            id: val.id,
            name: val.name,
            category: val.category,
            aisle: val.aisle,
            price: val.price,
            quantity: val.quantity,
            essential: val.essential,
        }
    }
}

/// Toggle items between the list and the cart
#[derive(ClapArgs)]
pub struct ToggleArgs {
    #[arg(required = true, help = "IDs (or unique prefixes) of the items to toggle")]
    pub ids: Vec<String>,
}

impl ToggleArgs {
    pub fn into_params(self) -> Vec<Id> {
        self.ids.into_iter().map(Id::new).collect()
    }
}

/// Finish the current trip
#[derive(ClapArgs)]
pub struct FinishArgs {
    /// Confirm finishing (required: the cart is emptied afterwards)
    #[arg(long)]
    pub confirm: bool,
}

impl From<FinishArgs> for FinishTrip {
    fn from(val: FinishArgs) -> Self {
        FinishTrip {
            confirmed: val.confirm,
        }
    }
}

/// Clear the trip history
#[derive(ClapArgs)]
pub struct ClearHistoryArgs {
    /// Confirm clearing (required: this cannot be undone)
    #[arg(long)]
    pub confirm: bool,
}

impl From<ClearHistoryArgs> for ClearHistory {
    fn from(val: ClearHistoryArgs) -> Self {
        ClearHistory {
            confirmed: val.confirm,
        }
    }
}
