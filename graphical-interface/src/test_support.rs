use client::{Airline, AirlineDraft};

use crate::api::{ApiError, Provider};

pub fn sample_airline(id: &str, code: &str) -> Airline {
    Airline {
        id: id.to_string(),
        code: code.to_string(),
        name: format!("{} Air", code),
        terminal: "T1".to_string(),
        image: format!("https://cdn.example/{}.png", id),
    }
}

/// Scripted provider recording every call, so tests can assert exactly
/// which requests an interaction issued.
pub struct MockApi {
    pub airlines: Vec<Airline>,
    pub fail_list: bool,
    pub fail_create: bool,
    pub fail_update: bool,
    pub failing_deletes: Vec<String>,
    pub list_calls: usize,
    pub created: Vec<AirlineDraft>,
    pub updated: Vec<(String, AirlineDraft)>,
    pub deleted: Vec<String>,
}

impl MockApi {
    pub fn with_airlines(airlines: Vec<Airline>) -> Self {
        Self {
            airlines,
            fail_list: false,
            fail_create: false,
            fail_update: false,
            failing_deletes: Vec::new(),
            list_calls: 0,
            created: Vec::new(),
            updated: Vec::new(),
            deleted: Vec::new(),
        }
    }

    pub fn failing_list() -> Self {
        let mut api = Self::with_airlines(Vec::new());
        api.fail_list = true;
        api
    }
}

impl Provider for MockApi {
    fn get_airlines(&mut self) -> Result<Vec<Airline>, ApiError> {
        self.list_calls += 1;
        if self.fail_list {
            return Err(ApiError::new("Fetch airlines failed"));
        }
        Ok(self.airlines.clone())
    }

    fn add_airline(&mut self, draft: &AirlineDraft) -> Result<Airline, ApiError> {
        self.created.push(draft.clone());
        if self.fail_create {
            return Err(ApiError::new("Create airline failed"));
        }
        Ok(Airline {
            id: format!("al-{}", self.created.len()),
            code: draft.code.clone(),
            name: draft.name.clone(),
            terminal: draft.terminal.clone(),
            image: String::new(),
        })
    }

    fn update_airline(&mut self, id: &str, draft: &AirlineDraft) -> Result<Airline, ApiError> {
        self.updated.push((id.to_string(), draft.clone()));
        if self.fail_update {
            return Err(ApiError::new("Update airline failed"));
        }
        Ok(Airline {
            id: id.to_string(),
            code: draft.code.clone(),
            name: draft.name.clone(),
            terminal: draft.terminal.clone(),
            image: String::new(),
        })
    }

    fn delete_airline(&mut self, id: &str) -> Result<(), ApiError> {
        self.deleted.push(id.to_string());
        if self.failing_deletes.iter().any(|failing| failing == id) {
            return Err(ApiError::new("Delete airline failed"));
        }
        Ok(())
    }
}
