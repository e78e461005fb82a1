//! Request payload validation.
//!
//! Every write operation passes through one of these validators before it
//! touches the repository layer. A validator either yields a fully typed
//! value or a field-keyed collection of human-readable messages; all
//! violations on a field are retained, not just the first.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::models::{
    Gender, Medicine, NewOldAgeHome, NewPatient, NewPrescription, NewReport,
};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());
static PINCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").unwrap());
static BLOOD_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(A|B|AB|O)[+-]$").unwrap());

/// Field-keyed validation messages, serialized as the `details` object of
/// a 400 response.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Validated signup payload.
#[derive(Debug, Clone)]
pub struct SignupData {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Validated signin payload.
#[derive(Debug, Clone)]
pub struct SigninData {
    pub email: String,
    pub password: String,
}

pub fn validate_signup(body: &Value) -> Result<SignupData, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let username = take_string(body, "username", "Username is required", &mut errors);
    if let Some(username) = &username {
        if username.chars().count() < 3 {
            errors.push("username", "Username must be at least 3 characters");
        }
    }

    let email = take_email(body, &mut errors);
    let password = take_password(body, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(SignupData {
        username: username.unwrap(),
        email: email.unwrap(),
        password: password.unwrap(),
    })
}

pub fn validate_signin(body: &Value) -> Result<SigninData, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let email = take_email(body, &mut errors);
    let password = take_password(body, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(SigninData {
        email: email.unwrap(),
        password: password.unwrap(),
    })
}

pub fn validate_old_age_home(body: &Value) -> Result<NewOldAgeHome, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = take_string(body, "name", "Name is required", &mut errors);
    if let Some(name) = &name {
        let len = name.chars().count();
        if len < 2 {
            errors.push("name", "Name must be at least 2 characters");
        }
        if len > 100 {
            errors.push("name", "Name cannot exceed 100 characters");
        }
    }

    let phone_number =
        take_string(body, "phoneNumber", "Phone number is required", &mut errors);
    if let Some(phone) = &phone_number {
        if !PHONE_RE.is_match(phone) {
            errors.push("phoneNumber", "Invalid phone number format");
        }
    }

    let address = take_string(body, "address", "Address is required", &mut errors);
    if let Some(address) = &address {
        if address.chars().count() < 5 {
            errors.push("address", "Address must be at least 5 characters");
        }
    }

    let city = take_string(body, "city", "City is required", &mut errors);
    if let Some(city) = &city {
        let len = city.chars().count();
        if len < 2 {
            errors.push("city", "City must be at least 2 characters");
        }
        if len > 50 {
            errors.push("city", "City cannot exceed 50 characters");
        }
    }

    let state = take_string(body, "state", "State is required", &mut errors);
    if let Some(state) = &state {
        let len = state.chars().count();
        if len < 2 {
            errors.push("state", "State must be at least 2 characters");
        }
        if len > 50 {
            errors.push("state", "State cannot exceed 50 characters");
        }
    }

    let pincode = take_string(body, "pincode", "Pincode is required", &mut errors);
    if let Some(pincode) = &pincode {
        if !PINCODE_RE.is_match(pincode) {
            errors.push("pincode", "Pincode must be exactly 6 digits");
        }
    }

    // Defaults to 0 when absent
    let current_occupancy = match body.get("currentOccupancy") {
        None | Some(Value::Null) => Some(0),
        Some(_) => {
            let occupancy =
                take_int(body, "currentOccupancy", "Current occupancy", &mut errors);
            if let Some(occupancy) = occupancy {
                if occupancy < 0 {
                    errors.push("currentOccupancy", "Current occupancy cannot be negative");
                }
            }
            occupancy
        }
    };

    let caretaker_id = take_positive_int(
        body,
        "assignedCaretakerId",
        "Caretaker ID",
        "Caretaker ID must be a positive number",
        &mut errors,
    );
    let doctor_id = take_positive_int(
        body,
        "assignedDoctorId",
        "Doctor ID",
        "Doctor ID must be a positive number",
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewOldAgeHome {
        name: name.unwrap(),
        phone_number: phone_number.unwrap(),
        address: address.unwrap(),
        city: city.unwrap(),
        state: state.unwrap(),
        pincode: pincode.unwrap(),
        current_occupancy: current_occupancy.unwrap(),
        assigned_caretaker_id: caretaker_id.unwrap(),
        assigned_doctor_id: doctor_id.unwrap(),
    })
}

pub fn validate_patient(body: &Value) -> Result<NewPatient, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = take_string(body, "name", "Name is required", &mut errors);
    if let Some(name) = &name {
        let len = name.chars().count();
        if len < 2 {
            errors.push("name", "Name must be at least 2 characters");
        }
        if len > 255 {
            errors.push("name", "Name cannot exceed 255 characters");
        }
    }

    let age = take_int(body, "age", "Age", &mut errors);
    if let Some(age) = age {
        if age < 0 {
            errors.push("age", "Age cannot be negative");
        }
        if age > 150 {
            errors.push("age", "Age must be realistic");
        }
    }

    // Base length checks first; the membership check only runs on a
    // well-formed string.
    let mut gender = None;
    if let Some(raw) = take_string(body, "gender", "Gender is required", &mut errors) {
        let len = raw.chars().count();
        if len < 1 {
            errors.push("gender", "Gender is required");
        } else if len > 10 {
            errors.push("gender", "Gender cannot exceed 10 characters");
        } else {
            match Gender::from_str(&raw) {
                Ok(parsed) => gender = Some(parsed),
                Err(_) => {
                    errors.push("gender", "Gender must be either Male, Female, or Other")
                }
            }
        }
    }

    let mut blood_group = None;
    if let Some(raw) = take_string(body, "bloodGroup", "Blood group is required", &mut errors) {
        let len = raw.chars().count();
        if len < 1 {
            errors.push("bloodGroup", "Blood group is required");
        } else if len > 5 {
            errors.push("bloodGroup", "Blood group cannot exceed 5 characters");
        } else if !BLOOD_GROUP_RE.is_match(&raw) {
            errors.push(
                "bloodGroup",
                "Invalid blood group format. Must be like A+, B-, etc.",
            );
        } else {
            blood_group = Some(raw);
        }
    }

    let contact = take_string(body, "contact", "Contact number is required", &mut errors);
    if let Some(contact) = &contact {
        let len = contact.chars().count();
        if len < 10 {
            errors.push("contact", "Contact number must be at least 10 digits");
        }
        if len > 15 {
            errors.push("contact", "Contact number cannot exceed 15 characters");
        }
        if !PHONE_RE.is_match(contact) {
            errors.push(
                "contact",
                "Invalid contact number format. Must contain only numbers and optional + prefix",
            );
        }
    }

    let medical_history = take_string_array(
        body,
        "medicalHistory",
        "Medical history must be an array of strings",
        &mut errors,
    );

    let old_age_home_id = take_positive_int(
        body,
        "oldAgeHomeId",
        "Old age home ID",
        "Old age home ID must be positive",
        &mut errors,
    );
    // Lowercase `c` is the wire name the UI already sends.
    let caretaker_id = take_positive_int(
        body,
        "assignedcaretakerId",
        "Assigned caretaker ID",
        "Assigned caretaker ID must be positive",
        &mut errors,
    );
    let doctor_id = take_positive_int(
        body,
        "assignedDoctorId",
        "Assigned doctor ID",
        "Assigned doctor ID must be positive",
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewPatient {
        name: name.unwrap(),
        age: age.unwrap(),
        gender: gender.unwrap(),
        blood_group: blood_group.unwrap(),
        contact: contact.unwrap(),
        medical_history: medical_history.unwrap(),
        old_age_home_id: old_age_home_id.unwrap(),
        assigned_caretaker_id: caretaker_id.unwrap(),
        assigned_doctor_id: doctor_id.unwrap(),
    })
}

pub fn validate_report(body: &Value) -> Result<NewReport, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let symptoms = take_string(body, "symptoms", "Symptoms are required", &mut errors);
    if let Some(symptoms) = &symptoms {
        if symptoms.is_empty() {
            errors.push("symptoms", "Symptoms are required");
        }
    }

    let detailed_analysis = take_string(
        body,
        "detailedAnalysis",
        "Detailed analysis is required",
        &mut errors,
    );
    if let Some(analysis) = &detailed_analysis {
        if analysis.chars().count() < 10 {
            errors.push("detailedAnalysis", "Detailed analysis is required");
        }
    }

    let precautions = take_string_array(
        body,
        "precautions",
        "At least one precaution is required",
        &mut errors,
    );
    if let Some(precautions) = &precautions {
        if precautions.is_empty() {
            errors.push("precautions", "At least one precaution is required");
        }
    }

    let type_of_doctors = take_string(
        body,
        "typeOfDoctors",
        "Type of doctors is required",
        &mut errors,
    );
    if let Some(type_of_doctors) = &type_of_doctors {
        if type_of_doctors.chars().count() < 2 {
            errors.push("typeOfDoctors", "Type of doctors is required");
        }
    }

    let predictions = take_string_array(
        body,
        "predictions",
        "At least one prediction is required",
        &mut errors,
    );
    if let Some(predictions) = &predictions {
        if predictions.is_empty() {
            errors.push("predictions", "At least one prediction is required");
        }
    }

    let patient_id = take_positive_int(
        body,
        "patientId",
        "Patient ID",
        "Patient ID must be positive",
        &mut errors,
    );
    let caretaker_id = take_positive_int(
        body,
        "caretakerId",
        "Caretaker ID",
        "Caretaker ID must be positive",
        &mut errors,
    );
    let doctor_id = take_positive_int(
        body,
        "doctorId",
        "Doctor ID",
        "Doctor ID must be positive",
        &mut errors,
    );

    // Defaults to false when absent
    let verified = match body.get("verified") {
        None | Some(Value::Null) => Some(false),
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => {
            errors.push("verified", "Verified must be a boolean");
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewReport {
        symptoms: symptoms.unwrap(),
        detailed_analysis: detailed_analysis.unwrap(),
        precautions: precautions.unwrap(),
        type_of_doctors: type_of_doctors.unwrap(),
        predictions: predictions.unwrap(),
        patient_id: patient_id.unwrap(),
        caretaker_id: caretaker_id.unwrap(),
        doctor_id: doctor_id.unwrap(),
        verified: verified.unwrap(),
    })
}

pub fn validate_prescription(body: &Value) -> Result<NewPrescription, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let patient_id = take_positive_int(
        body,
        "patientId",
        "Patient ID",
        "Patient ID must be positive",
        &mut errors,
    );
    let doctor_id = take_positive_int(
        body,
        "doctorId",
        "Doctor ID",
        "Doctor ID must be positive",
        &mut errors,
    );
    let report_id = take_positive_int(
        body,
        "reportId",
        "Report ID",
        "Report ID must be positive",
        &mut errors,
    );

    let medicines = take_medicines(body, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewPrescription {
        patient_id: patient_id.unwrap(),
        doctor_id: doctor_id.unwrap(),
        report_id: report_id.unwrap(),
        medicines: medicines.unwrap(),
    })
}

fn take_medicines(body: &Value, errors: &mut ValidationErrors) -> Option<Vec<Medicine>> {
    let entries = match body.get("medicines") {
        Some(Value::Array(entries)) => entries,
        _ => {
            errors.push("medicines", "At least one medicine is required");
            return None;
        }
    };

    if entries.is_empty() {
        errors.push("medicines", "At least one medicine is required");
        return None;
    }
    if entries.len() > 20 {
        errors.push("medicines", "Cannot exceed 20 medicines");
        return None;
    }

    let before = errors.messages("medicines").len();
    let mut medicines = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = take_medicine_field(entry, "name", "Medicine name", 100, errors);
        let dosage = take_medicine_field(entry, "dosage", "Dosage", 50, errors);
        let frequency = take_medicine_field(entry, "frequency", "Frequency", 50, errors);
        let duration = take_medicine_field(entry, "duration", "Duration", 50, errors);
        if let (Some(name), Some(dosage), Some(frequency), Some(duration)) =
            (name, dosage, frequency, duration)
        {
            medicines.push(Medicine { name, dosage, frequency, duration });
        }
    }

    // Any per-entry failure invalidates the whole list
    if errors.messages("medicines").len() > before {
        return None;
    }
    Some(medicines)
}

/// Medicine entry fields all share the same shape: required string,
/// 2..=max characters. Errors collapse onto the `medicines` key the way
/// the boundary flattens nested paths.
fn take_medicine_field(
    entry: &Value,
    key: &str,
    label: &str,
    max: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let raw = match entry.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => {
            errors.push("medicines", format!("{label} is required"));
            return None;
        }
    };
    let len = raw.chars().count();
    let mut ok = true;
    if len < 2 {
        errors.push("medicines", format!("{label} must be at least 2 characters"));
        ok = false;
    }
    if len > max {
        errors.push("medicines", format!("{label} cannot exceed {max} characters"));
        ok = false;
    }
    ok.then_some(raw)
}

fn take_email(body: &Value, errors: &mut ValidationErrors) -> Option<String> {
    let email = take_string(body, "email", "Email is required", errors)?;
    if !EMAIL_RE.is_match(&email) {
        errors.push("email", "Invalid email address format");
    }
    Some(email)
}

fn take_password(body: &Value, errors: &mut ValidationErrors) -> Option<String> {
    let password = take_string(body, "password", "Password is required", errors)?;
    let len = password.chars().count();
    if len < 8 {
        errors.push("password", "Password must be at least 8 characters");
    }
    if len > 100 {
        errors.push("password", "Password cannot exceed 100 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("password", "Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("password", "Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("password", "Password must contain at least one number");
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        errors.push("password", "Password must contain at least one special character");
    }
    Some(password)
}

fn take_string(
    body: &Value,
    key: &str,
    required_msg: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match body.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => {
            errors.push(key, required_msg);
            None
        }
    }
}

fn take_int(
    body: &Value,
    key: &str,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    match body.get(key) {
        None | Some(Value::Null) => {
            errors.push(key, format!("{label} is required"));
            None
        }
        Some(v) => {
            if let Some(n) = v.as_i64() {
                Some(n)
            } else if let Some(f) = v.as_f64() {
                // 5.0 counts as an integer, 5.5 does not
                if f.fract() == 0.0 && f.abs() < (i64::MAX as f64) {
                    Some(f as i64)
                } else {
                    errors.push(key, format!("{label} must be an integer"));
                    None
                }
            } else {
                errors.push(key, format!("{label} must be a number"));
                None
            }
        }
    }
}

fn take_positive_int(
    body: &Value,
    key: &str,
    label: &str,
    positive_msg: &str,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    let n = take_int(body, key, label, errors)?;
    if n <= 0 {
        errors.push(key, positive_msg);
        return None;
    }
    Some(n)
}

fn take_string_array(
    body: &Value,
    key: &str,
    missing_msg: &str,
    errors: &mut ValidationErrors,
) -> Option<Vec<String>> {
    let entries = match body.get(key) {
        Some(Value::Array(entries)) => entries,
        _ => {
            errors.push(key, missing_msg);
            return None;
        }
    };
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            Value::String(s) => out.push(s.clone()),
            _ => {
                errors.push(key, missing_msg);
                return None;
            }
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signup_body(password: &str) -> Value {
        json!({ "username": "alice123", "email": "alice@x.com", "password": password })
    }

    #[test]
    fn valid_signup_passes() {
        let data = validate_signup(&signup_body("Aa1!aaaa")).unwrap();
        assert_eq!(data.username, "alice123");
        assert_eq!(data.email, "alice@x.com");
    }

    #[test]
    fn password_missing_uppercase_named() {
        let errors = validate_signup(&signup_body("aa1!aaaa")).unwrap_err();
        assert_eq!(
            errors.messages("password"),
            ["Password must contain at least one uppercase letter"]
        );
    }

    #[test]
    fn password_missing_lowercase_named() {
        let errors = validate_signup(&signup_body("AA1!AAAA")).unwrap_err();
        assert_eq!(
            errors.messages("password"),
            ["Password must contain at least one lowercase letter"]
        );
    }

    #[test]
    fn password_missing_digit_named() {
        let errors = validate_signup(&signup_body("Aa!aaaaa")).unwrap_err();
        assert_eq!(
            errors.messages("password"),
            ["Password must contain at least one number"]
        );
    }

    #[test]
    fn password_missing_special_named() {
        let errors = validate_signup(&signup_body("Aa1aaaaa")).unwrap_err();
        assert_eq!(
            errors.messages("password"),
            ["Password must contain at least one special character"]
        );
    }

    #[test]
    fn short_password_collects_every_violation() {
        let errors = validate_signup(&signup_body("a")).unwrap_err();
        let messages = errors.messages("password");
        assert!(messages.contains(&"Password must be at least 8 characters".to_string()));
        assert!(messages
            .contains(&"Password must contain at least one uppercase letter".to_string()));
        assert!(messages.contains(&"Password must contain at least one number".to_string()));
        assert!(messages
            .contains(&"Password must contain at least one special character".to_string()));
    }

    #[test]
    fn missing_fields_reported_per_field() {
        let errors = validate_signup(&json!({})).unwrap_err();
        assert_eq!(errors.messages("username"), ["Username is required"]);
        assert_eq!(errors.messages("email"), ["Email is required"]);
        assert_eq!(errors.messages("password"), ["Password is required"]);
    }

    #[test]
    fn bad_email_rejected() {
        let errors = validate_signup(
            &json!({ "username": "alice123", "email": "not-an-email", "password": "Aa1!aaaa" }),
        )
        .unwrap_err();
        assert_eq!(errors.messages("email"), ["Invalid email address format"]);
    }

    #[test]
    fn signin_requires_full_password_rules() {
        let errors =
            validate_signin(&json!({ "email": "alice@x.com", "password": "weak" })).unwrap_err();
        assert!(!errors.messages("password").is_empty());
    }

    fn home_body() -> Value {
        json!({
            "name": "Sunrise Care",
            "phoneNumber": "9876543210",
            "address": "1 Main Street",
            "city": "Pune",
            "state": "Maharashtra",
            "pincode": "411001",
            "currentOccupancy": 12,
            "assignedCaretakerId": 1,
            "assignedDoctorId": 1
        })
    }

    #[test]
    fn valid_home_passes() {
        let home = validate_old_age_home(&home_body()).unwrap();
        assert_eq!(home.current_occupancy, 12);
    }

    #[test]
    fn occupancy_defaults_to_zero() {
        let mut body = home_body();
        body.as_object_mut().unwrap().remove("currentOccupancy");
        let home = validate_old_age_home(&body).unwrap();
        assert_eq!(home.current_occupancy, 0);
    }

    #[test]
    fn negative_occupancy_rejected() {
        let mut body = home_body();
        body["currentOccupancy"] = json!(-1);
        let errors = validate_old_age_home(&body).unwrap_err();
        assert_eq!(
            errors.messages("currentOccupancy"),
            ["Current occupancy cannot be negative"]
        );
    }

    #[test]
    fn pincode_must_be_exactly_six_digits() {
        for bad in ["12345", "1234567", "12345a"] {
            let mut body = home_body();
            body["pincode"] = json!(bad);
            let errors = validate_old_age_home(&body).unwrap_err();
            assert_eq!(
                errors.messages("pincode"),
                ["Pincode must be exactly 6 digits"],
                "pincode {bad:?} should be rejected"
            );
        }
        let mut body = home_body();
        body["pincode"] = json!("123456");
        assert!(validate_old_age_home(&body).is_ok());
    }

    #[test]
    fn non_positive_caretaker_id_rejected() {
        let mut body = home_body();
        body["assignedCaretakerId"] = json!(0);
        let errors = validate_old_age_home(&body).unwrap_err();
        assert_eq!(
            errors.messages("assignedCaretakerId"),
            ["Caretaker ID must be a positive number"]
        );
    }

    #[test]
    fn fractional_doctor_id_rejected() {
        let mut body = home_body();
        body["assignedDoctorId"] = json!(1.5);
        let errors = validate_old_age_home(&body).unwrap_err();
        assert_eq!(
            errors.messages("assignedDoctorId"),
            ["Doctor ID must be an integer"]
        );
    }

    fn patient_body() -> Value {
        json!({
            "name": "Ravi Kumar",
            "age": 82,
            "gender": "Male",
            "bloodGroup": "O+",
            "contact": "9876543210",
            "medicalHistory": ["hypertension"],
            "oldAgeHomeId": 1,
            "assignedcaretakerId": 1,
            "assignedDoctorId": 1
        })
    }

    #[test]
    fn blood_group_accept_reject_matrix() {
        for good in ["O+", "AB+", "A-", "B+"] {
            let mut body = patient_body();
            body["bloodGroup"] = json!(good);
            assert!(validate_patient(&body).is_ok(), "blood group {good:?} should pass");
        }
        for bad in ["O", "o+", "C+", "AB"] {
            let mut body = patient_body();
            body["bloodGroup"] = json!(bad);
            let errors = validate_patient(&body).unwrap_err();
            assert_eq!(
                errors.messages("bloodGroup"),
                ["Invalid blood group format. Must be like A+, B-, etc."],
                "blood group {bad:?} should fail"
            );
        }
    }

    #[test]
    fn gender_membership_enforced() {
        let mut body = patient_body();
        body["gender"] = json!("male");
        let errors = validate_patient(&body).unwrap_err();
        assert_eq!(
            errors.messages("gender"),
            ["Gender must be either Male, Female, or Other"]
        );
    }

    #[test]
    fn age_bounds_enforced() {
        let mut body = patient_body();
        body["age"] = json!(151);
        let errors = validate_patient(&body).unwrap_err();
        assert_eq!(errors.messages("age"), ["Age must be realistic"]);

        body["age"] = json!(-1);
        let errors = validate_patient(&body).unwrap_err();
        assert_eq!(errors.messages("age"), ["Age cannot be negative"]);

        body["age"] = json!(0);
        assert!(validate_patient(&body).is_ok());
        body["age"] = json!(150);
        assert!(validate_patient(&body).is_ok());
    }

    #[test]
    fn contact_format_and_length_checked() {
        let mut body = patient_body();
        body["contact"] = json!("12345");
        let errors = validate_patient(&body).unwrap_err();
        let messages = errors.messages("contact");
        assert!(messages.contains(&"Contact number must be at least 10 digits".to_string()));
        assert!(messages.contains(
            &"Invalid contact number format. Must contain only numbers and optional + prefix"
                .to_string()
        ));

        body["contact"] = json!("+919876543210");
        assert!(validate_patient(&body).is_ok());
    }

    #[test]
    fn empty_medical_history_is_fine() {
        let mut body = patient_body();
        body["medicalHistory"] = json!([]);
        let patient = validate_patient(&body).unwrap();
        assert!(patient.medical_history.is_empty());
    }

    fn report_body() -> Value {
        json!({
            "symptoms": "persistent cough",
            "detailedAnalysis": "Symptoms consistent with a respiratory infection.",
            "precautions": ["rest"],
            "typeOfDoctors": "Pulmonologist",
            "predictions": ["bronchitis"],
            "patientId": 1,
            "caretakerId": 1,
            "doctorId": 1
        })
    }

    #[test]
    fn report_verified_defaults_false() {
        let report = validate_report(&report_body()).unwrap();
        assert!(!report.verified);
    }

    #[test]
    fn report_requires_nonempty_arrays() {
        let mut body = report_body();
        body["precautions"] = json!([]);
        body["predictions"] = json!([]);
        let errors = validate_report(&body).unwrap_err();
        assert_eq!(errors.messages("precautions"), ["At least one precaution is required"]);
        assert_eq!(errors.messages("predictions"), ["At least one prediction is required"]);
    }

    #[test]
    fn short_analysis_rejected() {
        let mut body = report_body();
        body["detailedAnalysis"] = json!("too short");
        let errors = validate_report(&body).unwrap_err();
        assert_eq!(errors.messages("detailedAnalysis"), ["Detailed analysis is required"]);
    }

    fn prescription_body() -> Value {
        json!({
            "patientId": 1,
            "doctorId": 1,
            "reportId": 1,
            "medicines": [{
                "name": "Amoxicillin",
                "dosage": "500mg",
                "frequency": "twice daily",
                "duration": "7 days"
            }]
        })
    }

    #[test]
    fn valid_prescription_passes() {
        let prescription = validate_prescription(&prescription_body()).unwrap();
        assert_eq!(prescription.medicines.len(), 1);
    }

    #[test]
    fn zero_medicines_rejected_with_exact_message() {
        let mut body = prescription_body();
        body["medicines"] = json!([]);
        let errors = validate_prescription(&body).unwrap_err();
        assert_eq!(errors.messages("medicines"), ["At least one medicine is required"]);
    }

    #[test]
    fn more_than_twenty_medicines_rejected() {
        let medicine = prescription_body()["medicines"][0].clone();
        let mut body = prescription_body();
        body["medicines"] = Value::Array(vec![medicine; 21]);
        let errors = validate_prescription(&body).unwrap_err();
        assert_eq!(errors.messages("medicines"), ["Cannot exceed 20 medicines"]);
    }

    #[test]
    fn short_medicine_name_rejected() {
        let mut body = prescription_body();
        body["medicines"][0]["name"] = json!("A");
        let errors = validate_prescription(&body).unwrap_err();
        assert_eq!(
            errors.messages("medicines"),
            ["Medicine name must be at least 2 characters"]
        );
    }

    #[test]
    fn medicine_missing_field_named() {
        let mut body = prescription_body();
        body["medicines"][0].as_object_mut().unwrap().remove("dosage");
        let errors = validate_prescription(&body).unwrap_err();
        assert_eq!(errors.messages("medicines"), ["Dosage is required"]);
    }
}
