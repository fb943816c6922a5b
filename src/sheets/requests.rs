use google_sheets4::FieldMask;
use google_sheets4::api::{
    BooleanCondition, CellData, CellFormat, ConditionValue, DataValidationRule, GridRange,
    RepeatCellRequest, Request,
};

/// Apply a partial format patch to every cell in the range. Only the fields
/// named in the mask are touched.
pub(super) fn repeat_cell_format(
    range: GridRange,
    format: CellFormat,
    fields: FieldMask,
) -> Request {
    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(range),
            cell: Some(CellData {
                user_entered_format: Some(format),
                ..Default::default()
            }),
            fields: Some(fields),
        }),
        ..Default::default()
    }
}

/// Replace any existing validation on the range with a strict "one of a list"
/// rule, rendered as a dropdown in the UI.
pub(super) fn list_validation(range: GridRange, values: &[String]) -> Request {
    let condition_values = values
        .iter()
        .map(|value| ConditionValue {
            user_entered_value: Some(value.clone()),
            ..Default::default()
        })
        .collect();

    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(range),
            cell: Some(CellData {
                data_validation: Some(DataValidationRule {
                    condition: Some(BooleanCondition {
                        type_: Some("ONE_OF_LIST".to_string()),
                        values: Some(condition_values),
                    }),
                    strict: Some(true),
                    show_custom_ui: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&["dataValidation"])),
        }),
        ..Default::default()
    }
}
