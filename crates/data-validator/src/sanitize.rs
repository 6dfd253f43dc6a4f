//! Draft Cleanup

use vehicle_model::VehicleDraft;

/// Fields every draft must carry
pub const REQUIRED_FIELDS: [&str; 4] = ["brand", "model", "year", "price"];

/// Required fields absent from the draft, in `REQUIRED_FIELDS` order.
///
/// Blank strings count as present here; `sanitize` turns them into `None`.
pub fn required_fields_missing(draft: &VehicleDraft) -> Vec<&'static str> {
    let present = [
        draft.brand.is_some(),
        draft.model.is_some(),
        draft.year.is_some(),
        draft.price.is_some(),
    ];
    REQUIRED_FIELDS
        .iter()
        .zip(present)
        .filter(|(_, present)| !present)
        .map(|(field, _)| *field)
        .collect()
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trim every text field, drop blank ones, and uppercase the VIN
pub fn sanitize(draft: VehicleDraft) -> VehicleDraft {
    VehicleDraft {
        brand: clean(draft.brand),
        model: clean(draft.model),
        vin: clean(draft.vin).map(|v| v.to_uppercase()),
        color: clean(draft.color),
        engine_type: clean(draft.engine_type),
        transmission: clean(draft.transmission),
        drive: clean(draft.drive),
        condition: clean(draft.condition),
        status: clean(draft.status),
        description: clean(draft.description),
        phone: clean(draft.phone),
        email: clean(draft.email),
        ..draft
    }
}
