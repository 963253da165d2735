/// Service request form
///
/// Field state and validation for the "Request a Service" form on the
/// contact section. Submission currently logs the structured record
/// locally; real delivery needs a storage backend.

use serde::Serialize;

/// Options for the required "Service Required" picker.
pub static SERVICE_OPTIONS: [&str; 7] = [
    "Video Editing",
    "Graphic Design",
    "DTP (Desktop Publishing)",
    "Web Design & Development",
    "Brand Identity Design",
    "Social Media Content",
    "Other",
];

/// Options for the optional budget picker, in Indian rupees.
pub static BUDGET_OPTIONS: [&str; 7] = [
    "Under ₹5,000",
    "₹5,000 - ₹15,000",
    "₹15,000 - ₹30,000",
    "₹30,000 - ₹50,000",
    "₹50,000 - ₹1,00,000",
    "Above ₹1,00,000",
    "Let's Discuss",
];

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in the required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("failed to encode service request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The form's current field values, doubling as the submission record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: Option<&'static str>,
    pub budget: Option<&'static str>,
    pub message: String,
}

impl ServiceRequest {
    /// Check the required fields, naming every missing one.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("full name");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone number");
        }
        if self.email.trim().is_empty() {
            missing.push("email address");
        }
        if self.service.is_none() {
            missing.push("service required");
        }
        if self.message.trim().is_empty() {
            missing.push("project details");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }

    /// Validate and log the structured record locally. Stands in for email
    /// delivery until a storage backend is connected.
    pub fn submit(&self) -> Result<(), FormError> {
        self.validate()?;
        let json = serde_json::to_string(self)?;
        println!("📨 Service request: {json}");
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = ServiceRequest::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> ServiceRequest {
        ServiceRequest {
            name: "Asha Nair".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "asha@example.com".to_string(),
            service: Some(SERVICE_OPTIONS[0]),
            budget: None,
            message: "Need a 2 minute promo video for a product launch.".to_string(),
        }
    }

    #[test]
    fn test_complete_request_validates() {
        assert!(complete_request().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_all_named() {
        let request = ServiceRequest::default();
        let err = request.validate().unwrap_err();
        match err {
            FormError::MissingFields(fields) => {
                assert_eq!(
                    fields,
                    vec!["full name", "phone number", "email address", "service required", "project details"]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_budget_is_optional() {
        let mut request = complete_request();
        request.budget = Some(BUDGET_OPTIONS[2]);
        assert!(request.validate().is_ok());
        request.budget = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_whitespace_only_fields_count_as_missing() {
        let mut request = complete_request();
        request.name = "   ".to_string();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("full name"));
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut request = complete_request();
        request.reset();
        assert_eq!(request, ServiceRequest::default());
    }
}
