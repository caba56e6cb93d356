use crate::domain::ingestion::entities::ScanKind;

const RECEIPT_SYSTEM_PROMPT: &str =
    "You are an expert assistant that extracts useful grocery items from receipts.";

const FRIDGE_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that identifies fridge food items from photos.";

const RECEIPT_INSTRUCTION: &str = r#"Extract all edible items from this receipt. Return only valid food items in JSON format like this:
[{"name":"Banana", "quantity":5, "unit":"pieces", "category":"Fruits", "expiration_days":5}]
Assume default expiration based on possible categories: Fruits, Vegetable, Grains, Beverage, Meat, Dairy, Seafood or Other. units can be: pieces, kg, lbs, liters. Ignore brands and additional information, use only integers for quantity. Combine multiple products by units if same are met."#;

const FRIDGE_INSTRUCTION: &str = r#"Analyze this fridge photo. List all edible items in JSON like:
[{"name":"Milk", "quantity":1, "unit":"liters", "category":"Dairy", "expiration_days":7}]
Assume default expiration based on possible categories: Fruits, Vegetable, Grains, Beverage, Meat, Dairy, Seafood or Other. units can be: pieces, kg, lbs, liters. Ignore brands and additional information, use only integers for quantity. Combine multiple products by units if same are met."#;

pub fn system_prompt(kind: ScanKind) -> &'static str {
    match kind {
        ScanKind::Receipt => RECEIPT_SYSTEM_PROMPT,
        ScanKind::Fridge => FRIDGE_SYSTEM_PROMPT,
    }
}

pub fn instruction(kind: ScanKind) -> &'static str {
    match kind {
        ScanKind::Receipt => RECEIPT_INSTRUCTION,
        ScanKind::Fridge => FRIDGE_INSTRUCTION,
    }
}
