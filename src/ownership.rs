//! Ownership rules over owners, companies, and employees.
//!
//! # Invariants
//! - An owner holds at most one company.
//! - Company names are unique across all owners.
//! - Employees are only reachable through the company of the calling owner.
//! - Deleting a company deletes its employees.
//!
//! Each rule returns the domain error kind (`NotFound`, `Forbidden`,
//! `Conflict`); handlers decide which status code an endpoint reports.
//! Checks and writes use separate statements. The schema's UNIQUE constraints
//! catch anything a concurrent writer slips in between them.

use rusqlite::Connection;

use crate::crypto::hash_password;
use crate::db::queries;
use crate::error::{AppError, Result, msg};
use crate::models::{Company, CreateOwner, Employee, Owner};

/// Register a new owner. Fails with `Conflict` if the name is taken.
pub fn register_owner(conn: &Connection, input: &CreateOwner) -> Result<Owner> {
    let name = input.name.trim();

    if queries::get_owner_by_name(conn, name)?.is_some() {
        return Err(AppError::Conflict(msg::OWNER_NAME_TAKEN.into()));
    }

    let owner = queries::create_owner(conn, name, &hash_password(&input.password))?;
    tracing::info!("Registered owner {} ({})", owner.name, owner.id);
    Ok(owner)
}

/// Create the owner's company.
///
/// Fails with `Conflict` if the name is used by any company or the owner
/// already has one.
pub fn create_company(conn: &Connection, owner: &Owner, name: &str) -> Result<Company> {
    let name = name.trim();

    if queries::get_company_by_name(conn, name)?.is_some() {
        return Err(AppError::Conflict(msg::COMPANY_NAME_TAKEN.into()));
    }
    if queries::get_company_by_owner(conn, &owner.id)?.is_some() {
        return Err(AppError::Conflict(msg::OWNER_HAS_COMPANY.into()));
    }

    let company = queries::create_company(conn, &owner.id, name)?;
    tracing::info!("Owner {} created company {}", owner.name, company.name);
    Ok(company)
}

/// Delete the owner's company by name, together with its employees.
///
/// Fails with `NotFound` if no company of that name belongs to the owner.
pub fn delete_company(conn: &mut Connection, owner: &Owner, name: &str) -> Result<Company> {
    let company = queries::get_owner_company_by_name(conn, &owner.id, name.trim())?
        .ok_or_else(|| AppError::NotFound(msg::COMPANY_NOT_FOUND.into()))?;

    let employees = queries::delete_company(conn, &company.id)?;
    tracing::info!(
        "Owner {} deleted company {} ({} employees removed)",
        owner.name,
        company.name,
        employees
    );
    Ok(company)
}

/// The owner's company, if any.
pub fn get_company_by_owner(conn: &Connection, owner: &Owner) -> Result<Option<Company>> {
    queries::get_company_by_owner(conn, &owner.id)
}

fn require_company(conn: &Connection, owner: &Owner) -> Result<Company> {
    get_company_by_owner(conn, owner)?.ok_or_else(|| AppError::NotFound(msg::NO_COMPANY.into()))
}

/// Add one employee to the owner's company.
pub fn add_employee(conn: &Connection, owner: &Owner, name: &str) -> Result<Employee> {
    let company = require_company(conn, owner)?;
    let employee = queries::create_employee(conn, &company.id, name.trim())?;
    tracing::info!("Added employee {} to company {}", employee.name, company.name);
    Ok(employee)
}

/// Add a batch of employees to the owner's company.
///
/// The company is resolved once. Nothing is inserted if the owner has no
/// company or any insert fails.
pub fn add_employees_bulk(
    conn: &mut Connection,
    owner: &Owner,
    names: &[String],
) -> Result<Vec<Employee>> {
    let company = require_company(conn, owner)?;
    let employees = queries::create_employees(conn, &company.id, names)?;
    tracing::info!(
        "Added {} employees to company {}",
        employees.len(),
        company.name
    );
    Ok(employees)
}

/// Employees of the owner's company, oldest first.
pub fn list_employees(conn: &Connection, owner: &Owner) -> Result<Vec<Employee>> {
    let company = require_company(conn, owner)?;
    queries::list_employees(conn, &company.id)
}

/// Delete an employee of the owner's company by name.
///
/// Fails with `NotFound` if the owner's company has no employee of that name.
pub fn delete_employee(conn: &Connection, owner: &Owner, name: &str) -> Result<Employee> {
    let employee = queries::get_owner_employee_by_name(conn, &owner.id, name.trim())?
        .ok_or_else(|| AppError::NotFound(msg::EMPLOYEE_NOT_FOUND.into()))?;

    if !queries::delete_employee(conn, &employee.id)? {
        return Err(AppError::NotFound(msg::EMPLOYEE_NOT_FOUND.into()));
    }

    tracing::info!("Owner {} deleted employee {}", owner.name, employee.name);
    Ok(employee)
}
