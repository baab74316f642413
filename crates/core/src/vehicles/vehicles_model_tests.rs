//! Tests for the vehicle record model and JSON intake.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::vehicles::{parse_vehicle_records, VehicleRecord};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sample_record() -> VehicleRecord {
        VehicleRecord::new(dec!(35000), 36, 50000, 1, 1)
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_record_deserializes_camel_case_fields() {
        let json = r#"{
            "purchaseValue": 35000,
            "ageInMonths": 36,
            "numberOfMiles": 50000,
            "numberOfPreviousOwners": 1,
            "numberOfCollisions": 1
        }"#;
        let record: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, sample_record());
    }

    #[test]
    fn test_record_accepts_string_purchase_value() {
        let json = r#"{
            "purchaseValue": "12500.50",
            "ageInMonths": 0,
            "numberOfMiles": 0,
            "numberOfPreviousOwners": 0,
            "numberOfCollisions": 0
        }"#;
        let record: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.purchase_value, dec!(12500.50));
    }

    #[test]
    fn test_record_serializes_camel_case_fields() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(value["ageInMonths"], 36);
        assert_eq!(value["numberOfMiles"], 50000);
        assert_eq!(value["numberOfPreviousOwners"], 1);
        assert_eq!(value["numberOfCollisions"], 1);
        assert_eq!(value["purchaseValue"], "35000");
    }

    #[test]
    fn test_string_purchase_value_keeps_full_precision() {
        let json = r#"{
            "purchaseValue": "12345678901234567.89",
            "ageInMonths": 0,
            "numberOfMiles": 0,
            "numberOfPreviousOwners": 1,
            "numberOfCollisions": 0
        }"#;
        let record: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.purchase_value, dec!(12345678901234567.89));

        let encoded = serde_json::to_string(&record).unwrap();
        assert!(encoded.contains(r#""purchaseValue":"12345678901234567.89""#));
        let decoded: VehicleRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_record_rejects_negative_counts() {
        let json = r#"{
            "purchaseValue": 35000,
            "ageInMonths": -1,
            "numberOfMiles": 50000,
            "numberOfPreviousOwners": 1,
            "numberOfCollisions": 1
        }"#;
        assert!(serde_json::from_str::<VehicleRecord>(json).is_err());
    }

    // ==================== parse_vehicle_records Tests ====================

    #[test]
    fn test_parse_single_object() {
        let json = r#"{"purchaseValue": 35000, "ageInMonths": 36, "numberOfMiles": 50000,
            "numberOfPreviousOwners": 1, "numberOfCollisions": 1}"#;
        let records = parse_vehicle_records(json).unwrap();
        assert_eq!(records, vec![sample_record()]);
    }

    #[test]
    fn test_parse_array() {
        let json = r#"[
            {"purchaseValue": 35000, "ageInMonths": 36, "numberOfMiles": 50000,
             "numberOfPreviousOwners": 1, "numberOfCollisions": 1},
            {"purchaseValue": 35000, "ageInMonths": 36, "numberOfMiles": 250000,
             "numberOfPreviousOwners": 0, "numberOfCollisions": 1}
        ]"#;
        let records = parse_vehicle_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].number_of_previous_owners, 0);
        assert_eq!(records[1].number_of_miles, 250000);
    }

    #[test]
    fn test_parse_empty_array() {
        let records = parse_vehicle_records("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_missing_field_fails() {
        let json = r#"{"purchaseValue": 35000, "ageInMonths": 36}"#;
        let err = parse_vehicle_records(json).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(
            err.to_string().contains("missing field `numberOfMiles`"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_parse_array_reports_missing_field_with_position() {
        let json = "[\n  {\"purchaseValue\": 35000, \"ageInMonths\": 36, \"numberOfMiles\": 1,\n   \"numberOfPreviousOwners\": 1, \"numberOfCollisions\": 0},\n  {\"purchaseValue\": 35000}\n]";
        let err = parse_vehicle_records(json).unwrap_err().to_string();
        assert!(err.contains("missing field `ageInMonths`"), "unexpected error: {}", err);
        assert!(err.contains("line 4"), "unexpected error: {}", err);
    }

    #[test]
    fn test_parse_accepts_leading_whitespace() {
        let json = "\n   [ ]";
        assert!(parse_vehicle_records(json).unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        let err = parse_vehicle_records("not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    // ==================== validate Tests ====================

    #[test]
    fn test_validate_accepts_positive_and_zero_values() {
        assert!(sample_record().validate().is_ok());
        let free = VehicleRecord::new(Decimal::ZERO, 0, 0, 0, 0);
        assert!(free.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_purchase_value() {
        let record = VehicleRecord::new(dec!(-1.50), 0, 0, 0, 0);
        assert_eq!(
            record.validate(),
            Err(ValidationError::NegativePurchaseValue("-1.50".to_string()))
        );
    }

    #[test]
    fn test_validation_error_converts_into_core_error() {
        let record = VehicleRecord::new(dec!(-10), 0, 0, 0, 0);
        let err: Error = record.validate().unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Purchase value must not be negative, got -10"
        );
    }
}
