//! Command handlers
//!
//! Each handler calls one or more `Grocer` operations, wraps the outcome in a
//! display type from `grocer_core::display` and hands the markdown to the
//! renderer.

use anyhow::{bail, Context, Result};
use grocer_core::{
    display::{CreateResult, DeleteResult, OperationStatus, ShoppingList},
    models::ItemStatus,
    params::{ClearHistory, Id},
    Backend, Grocer, GroceryError, Store,
};
use log::warn;

use crate::{
    args::{HistoryCommands, ItemCommands, ShopCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    grocer: Grocer,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(grocer: Grocer, renderer: TerminalRenderer) -> Self {
        Self { grocer, renderer }
    }

    /// Count of items on the list and the first few of them.
    pub async fn overview(&self) -> Result<()> {
        let preview = self
            .grocer
            .preview()
            .await
            .context("Failed to load shopping list")?;
        self.renderer.render(&preview.to_string())
    }

    pub async fn handle_item_command(mut self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => {
                let item = self
                    .grocer
                    .add_item(args.into())
                    .await
                    .context("Failed to add item")?;
                self.renderer.render(&CreateResult::new(item).to_string())
            }
            ItemCommands::List(args) => {
                let items = self
                    .grocer
                    .list_items(&args.into())
                    .await
                    .context("Failed to list items")?;
                self.renderer.render(&items.to_string())
            }
            ItemCommands::Show(args) => {
                let item = self
                    .grocer
                    .find_item(&args.id)
                    .await
                    .with_context(|| format!("Failed to show item {}", args.id))?;
                self.renderer.render(&item.to_string())
            }
            ItemCommands::Update(args) => {
                let result = self
                    .grocer
                    .update_item(args.into())
                    .await
                    .context("Failed to update item")?;
                self.renderer.render(&result.to_string())
            }
            ItemCommands::Delete(args) => {
                let id: Id = args.into();
                match self
                    .grocer
                    .delete_item(&id)
                    .await
                    .context("Failed to delete item")?
                {
                    Some(item) => self.renderer.render(&DeleteResult::new(item).to_string()),
                    None => bail!("Item with ID {} not found", id.id),
                }
            }
            ItemCommands::Need(args) => {
                let item = self
                    .grocer
                    .add_to_list(&args.into())
                    .await
                    .context("Failed to put item on the list")?;
                let status =
                    OperationStatus::success(format!("'{}' is on the shopping list", item.name));
                self.renderer.render(&status.to_string())
            }
            ItemCommands::Unneed(args) => {
                let item = self
                    .grocer
                    .remove_from_list(&args.into())
                    .await
                    .context("Failed to take item off the list")?;
                let status = OperationStatus::success(format!(
                    "'{}' is off the shopping list",
                    item.name
                ));
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub async fn handle_shop_command(mut self, command: ShopCommands) -> Result<()> {
        let preview = self
            .grocer
            .preview()
            .await
            .context("Failed to load shopping list")?;
        if !preview.can_shop() {
            return self.renderer.render(&preview.to_string());
        }

        match command {
            ShopCommands::List => {
                let trip = self
                    .grocer
                    .begin_trip()
                    .await
                    .context("Failed to start shopping")?;
                self.renderer
                    .render(&ShoppingList::new(trip.items()).to_string())?;
                trip.exit();
                Ok(())
            }
            ShopCommands::Toggle(args) => {
                let mut trip = self
                    .grocer
                    .begin_trip()
                    .await
                    .context("Failed to start shopping")?;
                let mut output = String::new();
                for id in args.into_params() {
                    let item = trip
                        .toggle(&id)
                        .await
                        .with_context(|| format!("Failed to toggle item {}", id.id))?;
                    let verb = if item.status == ItemStatus::InCart {
                        "Picked up"
                    } else {
                        "Put back"
                    };
                    output.push_str(
                        &OperationStatus::success(format!("{verb} '{}'", item.name)).to_string(),
                    );
                }
                output.push('\n');
                output.push_str(&ShoppingList::new(trip.items()).to_string());
                trip.exit();
                self.renderer.render(&output)
            }
            ShopCommands::Finish(args) => {
                let trip = self
                    .grocer
                    .begin_trip()
                    .await
                    .context("Failed to start shopping")?;
                match trip.finish(args.into()).await {
                    Ok(outcome) => self.renderer.render(&outcome.to_string()),
                    Err(GroceryError::PartialTrip { trip_id, failures }) => {
                        warn!(
                            "Trip {trip_id} recorded but {} item(s) were not reset, retrying",
                            failures.len()
                        );
                        self.grocer
                            .retry_resets(&trip_id, &failures)
                            .await
                            .with_context(|| {
                                format!(
                                    "Trip {trip_id} was recorded but the cart could not be \
                                     emptied"
                                )
                            })?;
                        let message = format!("Trip recorded with ID: {trip_id}");
                        let status = OperationStatus::success(message);
                        self.renderer.render(&status.to_string())
                    }
                    Err(e) => Err(e).context("Failed to finish trip"),
                }
            }
        }
    }

    pub async fn handle_history_command(mut self, command: HistoryCommands) -> Result<()> {
        match command {
            HistoryCommands::List => {
                let trips = self
                    .grocer
                    .history()
                    .await
                    .context("Failed to load history")?;
                self.renderer.render(&trips.to_string())
            }
            HistoryCommands::Clear(args) => {
                let params: ClearHistory = args.into();
                self.grocer
                    .clear_history(&params)
                    .await
                    .context("Failed to clear history")?;
                self.renderer
                    .render(&OperationStatus::success("Shopping history cleared").to_string())
            }
        }
    }

    /// Copies items and trips from `source` into the store this grocer uses.
    pub async fn migrate(mut self, source: &dyn Store) -> Result<()> {
        if self.grocer.backend() != Backend::Remote {
            bail!(
                "No remote store configured: set remote.url, remote.api_key and remote.access_token"
            );
        }

        let report = self
            .grocer
            .import_from(source)
            .await
            .context("Failed to import local data")?;
        self.renderer.render(&report.to_string())
    }
}
