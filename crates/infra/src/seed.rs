//! Starter catalogue written when no database exists yet.

use invcalc_core::ItemId;
use invcalc_inventory::Item;

fn sample(id: u64, name: &str, value: f64, sell_location: Option<&str>, sellable: bool) -> Item {
    Item {
        id: ItemId::new(id),
        name: name.to_string(),
        value,
        category: None,
        sell_location: sell_location.map(str::to_string),
        sellable: Some(sellable),
    }
}

pub fn sample_items() -> Vec<Item> {
    vec![
        sample(1, "Cash", 1.0, Some("Bank"), true),
        sample(2, "Screwdriver", 50.0, Some("Pawnshop"), true),
        sample(3, "Lock Picking Tool", 150.0, Some("Pawnshop"), true),
        sample(4, "Phone 11", 500.0, Some("Pawnshop"), true),
        sample(5, "Pistol Mag (50Cal)", 120.0, Some("Gun Store"), true),
        sample(6, "Desert Eagle", 1000.0, Some("Gun Store"), true),
        sample(7, "NOS Feed Line", 250.0, Some("Car Parts Shop"), true),
        sample(8, "Carbon Fibre", 300.0, Some("Car Parts Shop"), true),
        sample(9, "Red Keycard", 0.0, None, false),
        sample(10, "Drivers License", 0.0, None, false),
    ]
}
