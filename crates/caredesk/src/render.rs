//! Text rendering for the role stores
//!
//! Every container renders to a `comfy-table` table in its own traversal
//! order, or to a one-line message when it holds nothing.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::store::{IntakeQueue, InventoryStack, RotationQueue, TriageHeap};

pub const EMPTY_INTAKE: &str = "No patients in the intake queue.";
pub const EMPTY_INVENTORY: &str = "No supplies in inventory.";
pub const EMPTY_TRIAGE: &str = "No pending emergencies.";
pub const EMPTY_ROTATION: &str = "No ambulances registered.";

/// Printed under the triage table. Heap order is not priority order.
pub const TRIAGE_ORDER_NOTE: &str =
    "Note: cases are listed in heap order; only the highest priority case is served first.";

/// Render a container as display text
pub trait Render {
    fn render(&self) -> String;
}

fn new_table<const N: usize>(header: [&str; N]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

impl Render for IntakeQueue {
    fn render(&self) -> String {
        if self.is_empty() {
            return EMPTY_INTAKE.to_string();
        }
        let mut table = new_table(["ID", "Name", "Condition"]);
        for record in self.iter() {
            table.add_row([record.id.as_str(), record.name.as_str(), record.condition.as_str()]);
        }
        table.to_string()
    }
}

impl Render for InventoryStack {
    fn render(&self) -> String {
        if self.is_empty() {
            return EMPTY_INVENTORY.to_string();
        }
        let mut table = new_table(["Type", "Qty", "Batch"]);
        for record in self.iter().rev() {
            table.add_row([
                record.kind.to_string(),
                record.quantity.to_string(),
                record.batch.to_string(),
            ]);
        }
        table.to_string()
    }
}

impl Render for TriageHeap {
    fn render(&self) -> String {
        if self.is_empty() {
            return EMPTY_TRIAGE.to_string();
        }
        let mut table = new_table(["Patient", "Emergency", "Priority"]);
        for record in self.iter() {
            table.add_row([
                record.subject.to_string(),
                record.category.to_string(),
                record.priority.to_string(),
            ]);
        }
        format!("{table}\n{TRIAGE_ORDER_NOTE}")
    }
}

impl Render for RotationQueue {
    fn render(&self) -> String {
        if self.is_empty() {
            return EMPTY_ROTATION.to_string();
        }
        let mut table = new_table(["#", "Ambulance"]);
        for (n, record) in self.iter().enumerate() {
            table.add_row([(n + 1).to_string(), record.tag.to_string()]);
        }
        table.to_string()
    }
}
