use chrono::Utc;
use rusqlite::{Connection, TransactionBehavior, params};
use uuid::Uuid;

use crate::error::{AppError, Result, is_unique_violation, msg};
use crate::models::*;

use super::from_row::{COMPANY_COLS, EMPLOYEE_COLS, OWNER_COLS, query_all, query_one};

fn now() -> i64 {
    Utc::now().timestamp()
}

fn gen_id() -> String {
    Uuid::new_v4().to_string()
}

/// Map a unique constraint violation to `Conflict` with a readable message.
fn unique_conflict(err: rusqlite::Error, message: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(message.into())
    } else {
        err.into()
    }
}

/// Companies carry two unique constraints; report the one that fired.
fn company_conflict(err: rusqlite::Error) -> AppError {
    let on_owner = matches!(
        &err,
        rusqlite::Error::SqliteFailure(_, Some(m)) if m.contains("companies.owner_id")
    );
    let message = if on_owner {
        msg::OWNER_HAS_COMPANY
    } else {
        msg::COMPANY_NAME_TAKEN
    };
    unique_conflict(err, message)
}

// ============ Owners ============

/// Insert an owner. `password_hash` must already be hashed.
pub fn create_owner(conn: &Connection, name: &str, password_hash: &str) -> Result<Owner> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO owners (id, name, password_hash, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![&id, name, password_hash, now],
    )
    .map_err(|e| unique_conflict(e, msg::OWNER_NAME_TAKEN))?;

    Ok(Owner {
        id,
        name: name.to_string(),
        password_hash: password_hash.to_string(),
        created_at: now,
    })
}

pub fn get_owner_by_id(conn: &Connection, id: &str) -> Result<Option<Owner>> {
    query_one(
        conn,
        &format!("SELECT {} FROM owners WHERE id = ?1", OWNER_COLS),
        &[&id],
    )
}

pub fn get_owner_by_name(conn: &Connection, name: &str) -> Result<Option<Owner>> {
    query_one(
        conn,
        &format!("SELECT {} FROM owners WHERE name = ?1", OWNER_COLS),
        &[&name],
    )
}

// ============ Companies ============

pub fn create_company(conn: &Connection, owner_id: &str, name: &str) -> Result<Company> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO companies (id, name, owner_id, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![&id, name, owner_id, now],
    )
    .map_err(company_conflict)?;

    Ok(Company {
        id,
        name: name.to_string(),
        owner_id: owner_id.to_string(),
        created_at: now,
    })
}

pub fn get_company_by_name(conn: &Connection, name: &str) -> Result<Option<Company>> {
    query_one(
        conn,
        &format!("SELECT {} FROM companies WHERE name = ?1", COMPANY_COLS),
        &[&name],
    )
}

pub fn get_company_by_owner(conn: &Connection, owner_id: &str) -> Result<Option<Company>> {
    query_one(
        conn,
        &format!("SELECT {} FROM companies WHERE owner_id = ?1", COMPANY_COLS),
        &[&owner_id],
    )
}

/// Get a company by name, only if it belongs to the given owner.
pub fn get_owner_company_by_name(
    conn: &Connection,
    owner_id: &str,
    name: &str,
) -> Result<Option<Company>> {
    query_one(
        conn,
        &format!(
            "SELECT {} FROM companies WHERE owner_id = ?1 AND name = ?2",
            COMPANY_COLS
        ),
        &[&owner_id, &name],
    )
}

/// Delete a company and all of its employees in one transaction.
/// Returns the number of employees removed.
pub fn delete_company(conn: &mut Connection, company_id: &str) -> Result<usize> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let employees = tx.execute(
        "DELETE FROM employees WHERE company_id = ?1",
        params![company_id],
    )?;
    let deleted = tx.execute("DELETE FROM companies WHERE id = ?1", params![company_id])?;
    if deleted == 0 {
        // Dropping the transaction rolls the employee delete back.
        return Err(AppError::NotFound(msg::COMPANY_NOT_FOUND.into()));
    }

    tx.commit()?;
    Ok(employees)
}

// ============ Employees ============

pub fn create_employee(conn: &Connection, company_id: &str, name: &str) -> Result<Employee> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO employees (id, name, company_id, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![&id, name, company_id, now],
    )?;

    Ok(Employee {
        id,
        name: name.to_string(),
        company_id: company_id.to_string(),
        created_at: now,
    })
}

/// Insert a batch of employees. All rows are written or none are.
pub fn create_employees(
    conn: &mut Connection,
    company_id: &str,
    names: &[String],
) -> Result<Vec<Employee>> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let now = now();

    let mut created = Vec::with_capacity(names.len());
    {
        let mut stmt = tx.prepare(
            "INSERT INTO employees (id, name, company_id, created_at) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for name in names {
            let id = gen_id();
            stmt.execute(params![&id, name, company_id, now])?;
            created.push(Employee {
                id,
                name: name.clone(),
                company_id: company_id.to_string(),
                created_at: now,
            });
        }
    }

    tx.commit()?;
    Ok(created)
}

pub fn list_employees(conn: &Connection, company_id: &str) -> Result<Vec<Employee>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM employees WHERE company_id = ?1 ORDER BY created_at, rowid",
            EMPLOYEE_COLS
        ),
        &[&company_id],
    )
}

pub fn count_employees(conn: &Connection, company_id: &str) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM employees WHERE company_id = ?1",
        params![company_id],
        |row| row.get(0),
    )
    .map_err(Into::into)
}

/// Find an employee by name within the company owned by `owner_id`.
/// With duplicate names, the oldest row wins.
pub fn get_owner_employee_by_name(
    conn: &Connection,
    owner_id: &str,
    name: &str,
) -> Result<Option<Employee>> {
    query_one(
        conn,
        &format!(
            "SELECT {} FROM employees
             WHERE name = ?2
               AND company_id IN (SELECT id FROM companies WHERE owner_id = ?1)
             ORDER BY created_at, rowid
             LIMIT 1",
            EMPLOYEE_COLS
        ),
        &[&owner_id, &name],
    )
}

pub fn delete_employee(conn: &Connection, id: &str) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM employees WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}
