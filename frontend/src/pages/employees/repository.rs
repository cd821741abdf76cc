use crate::api::{ApiClient, ApiError, Employee, EmployeeCreate, EmployeeUpdate};

#[derive(Clone)]
pub enum EmployeeSavePayload {
    Create(EmployeeCreate),
    Update(i64, EmployeeUpdate),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedEmployee {
    pub employee: Employee,
    pub updated: bool,
}

pub async fn fetch_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

pub async fn save_employee(
    api: &ApiClient,
    payload: EmployeeSavePayload,
) -> Result<SavedEmployee, ApiError> {
    match payload {
        EmployeeSavePayload::Create(create) => {
            let employee = api.create_employee(&create).await?;
            Ok(SavedEmployee {
                employee,
                updated: false,
            })
        }
        EmployeeSavePayload::Update(id, update) => {
            let employee = api.update_employee(id, &update).await?;
            Ok(SavedEmployee {
                employee,
                updated: true,
            })
        }
    }
}

/// Returns the removed employee so callers can phrase the confirmation.
pub async fn remove_employee(api: &ApiClient, employee: Employee) -> Result<Employee, ApiError> {
    api.delete_employee(employee.id).await?;
    Ok(employee)
}
