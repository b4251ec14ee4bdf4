//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use aqari_core::error::AppError;
use aqari_core::result::AppResult;
use aqari_database::repositories::contract::ContractInput;
use aqari_database::repositories::invoice::InvoiceInput;
use aqari_database::repositories::maintenance::MaintenanceInput;
use aqari_database::repositories::property::PropertyInput;
use aqari_database::repositories::tenant::TenantInput;
use aqari_database::repositories::unit::UnitInput;
use aqari_entity::contract::ContractStatus;
use aqari_entity::invoice::InvoiceStatus;
use aqari_entity::maintenance::MaintenanceStatus;
use aqari_entity::reminder::ReminderStatus;
use aqari_entity::unit::UnitStatus;

/// Create or update a property.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PropertyRequest {
    /// Property name.
    #[validate(length(min = 1, message = "Property name is required"))]
    pub name: String,
    /// Street address.
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    /// Area or neighbourhood.
    pub area: Option<String>,
    /// Property type, e.g. `"apartment_building"`.
    #[validate(length(min = 1, message = "Property type is required"))]
    pub property_type: String,
    /// Number of units in the building.
    #[validate(range(min = 0))]
    pub total_units: i32,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl PropertyRequest {
    /// Convert into the repository input.
    pub fn into_input(self) -> PropertyInput {
        PropertyInput {
            name: self.name,
            address: self.address,
            area: self.area,
            property_type: self.property_type,
            total_units: self.total_units,
            notes: self.notes,
        }
    }
}

/// Create or update a unit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UnitRequest {
    /// Owning property.
    pub property_id: Uuid,
    /// Unit number within the property.
    #[validate(length(min = 1, message = "Unit number is required"))]
    pub unit_number: String,
    /// Floor number.
    pub floor: Option<i32>,
    /// Bedroom count.
    pub bedrooms: Option<i32>,
    /// Monthly rent in KWD.
    #[validate(range(min = 0.0))]
    pub rent_amount: f64,
    /// Occupancy status.
    pub status: String,
}

impl UnitRequest {
    /// Convert into the repository input, rejecting unknown statuses.
    pub fn into_input(self) -> AppResult<UnitInput> {
        let status = UnitStatus::from_str(&self.status).map_err(AppError::validation)?;
        Ok(UnitInput {
            property_id: self.property_id,
            unit_number: self.unit_number,
            floor: self.floor,
            bedrooms: self.bedrooms,
            rent_amount: self.rent_amount,
            status: status.as_str().to_string(),
        })
    }
}

/// Create or update a tenant.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TenantRequest {
    /// Given name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Contact phone number. May be empty; an empty phone only blocks
    /// WhatsApp reminders.
    #[serde(default)]
    pub phone: String,
    /// Contact email.
    pub email: Option<String>,
    /// Kuwaiti civil ID number.
    pub civil_id: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl TenantRequest {
    /// Convert into the repository input.
    pub fn into_input(self) -> TenantInput {
        TenantInput {
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
            civil_id: self.civil_id,
            notes: self.notes,
        }
    }
}

/// Create or update a lease contract.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContractRequest {
    /// Human-readable contract number.
    #[validate(length(min = 1, message = "Contract number is required"))]
    pub contract_number: String,
    /// The leasing tenant.
    pub tenant_id: Uuid,
    /// The leased property.
    pub property_id: Uuid,
    /// The leased unit, when tracked per unit.
    pub unit_id: Option<Uuid>,
    /// Lease start date.
    pub start_date: NaiveDate,
    /// Lease end date.
    pub end_date: NaiveDate,
    /// Monthly rent in KWD.
    #[validate(range(min = 0.0))]
    pub rent_amount: f64,
    /// Lease status.
    pub status: String,
}

impl ContractRequest {
    /// Convert into the repository input, rejecting unknown statuses
    /// and inverted date ranges.
    pub fn into_input(self) -> AppResult<ContractInput> {
        let status = ContractStatus::from_str(&self.status).map_err(AppError::validation)?;
        if self.end_date < self.start_date {
            return Err(AppError::validation("End date is before start date"));
        }
        Ok(ContractInput {
            contract_number: self.contract_number,
            tenant_id: self.tenant_id,
            property_id: self.property_id,
            unit_id: self.unit_id,
            start_date: self.start_date,
            end_date: self.end_date,
            rent_amount: self.rent_amount,
            status: status.as_str().to_string(),
        })
    }
}

/// Create or update an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InvoiceRequest {
    /// Human-readable invoice number.
    #[validate(length(min = 1, message = "Invoice number is required"))]
    pub invoice_number: String,
    /// The billed tenant.
    pub tenant_id: Uuid,
    /// The related property.
    pub property_id: Uuid,
    /// Total amount in KWD.
    #[validate(range(min = 0.0))]
    pub amount: f64,
    /// Payment status.
    pub status: String,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Due date.
    pub due_date: NaiveDate,
}

impl InvoiceRequest {
    /// Convert into the repository input, rejecting unknown statuses.
    pub fn into_input(self) -> AppResult<InvoiceInput> {
        let status = InvoiceStatus::from_str(&self.status).map_err(AppError::validation)?;
        Ok(InvoiceInput {
            invoice_number: self.invoice_number,
            tenant_id: self.tenant_id,
            property_id: self.property_id,
            amount: self.amount,
            status: status.as_str().to_string(),
            issue_date: self.issue_date,
            due_date: self.due_date,
        })
    }
}

/// Change only an invoice's payment status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceStatusRequest {
    /// New payment status.
    pub status: String,
}

impl InvoiceStatusRequest {
    /// Parse the status, rejecting unknown values.
    pub fn parse_status(&self) -> AppResult<InvoiceStatus> {
        InvoiceStatus::from_str(&self.status).map_err(AppError::validation)
    }
}

/// Change a WhatsApp reminder log's delivery status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderStatusRequest {
    /// New delivery status.
    pub status: String,
}

impl ReminderStatusRequest {
    /// Parse the status, rejecting unknown values.
    pub fn parse_status(&self) -> AppResult<ReminderStatus> {
        ReminderStatus::from_str(&self.status).map_err(AppError::validation)
    }
}

/// Add a line item to an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InvoiceItemRequest {
    /// Line item description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Line amount in KWD.
    pub amount: f64,
}

/// Create or update a maintenance request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MaintenanceRequestBody {
    /// Short summary of the problem.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// The affected property.
    pub property_id: Uuid,
    /// The affected unit, when known.
    pub unit_id: Option<Uuid>,
    /// The reporting tenant, when reported by a tenant.
    pub tenant_id: Option<Uuid>,
    /// Priority: `"low"`, `"medium"`, `"high"`, `"urgent"`.
    pub priority: String,
    /// Workflow status.
    pub status: String,
    /// Assigned contractor or handyman.
    pub assigned_to: Option<String>,
}

impl MaintenanceRequestBody {
    /// Convert into the repository input, rejecting unknown statuses
    /// and priorities.
    pub fn into_input(self) -> AppResult<MaintenanceInput> {
        let status = MaintenanceStatus::from_str(&self.status).map_err(AppError::validation)?;
        if !matches!(self.priority.as_str(), "low" | "medium" | "high" | "urgent") {
            return Err(AppError::validation(format!(
                "unknown maintenance priority: {}",
                self.priority
            )));
        }
        Ok(MaintenanceInput {
            title: self.title,
            description: self.description,
            property_id: self.property_id,
            unit_id: self.unit_id,
            tenant_id: self.tenant_id,
            priority: self.priority,
            status: status.as_str().to_string(),
            assigned_to: self.assigned_to,
        })
    }
}
