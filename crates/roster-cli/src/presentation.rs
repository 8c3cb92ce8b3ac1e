//! Plain-text rendering of users.

use std::fmt::Write;

use roster_core::User;

const MISSING: &str = "-";

fn or_missing(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(MISSING)
}

/// One row per user: id, display name, username and email.
pub fn format_users_table(users: &[User]) -> String {
    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|user| {
            [
                user.id.map_or_else(|| MISSING.to_string(), |id| id.to_string()),
                user.display_name().to_string(),
                or_missing(user.username.as_deref()).to_string(),
                or_missing(user.email.as_deref()).to_string(),
            ]
        })
        .collect();

    let headers = ["ID", "NAME", "USERNAME", "EMAIL"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: [&str; 4]| {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    };

    push_row(headers);
    for row in &rows {
        push_row([&row[0], &row[1], &row[2], &row[3]]);
    }
    out
}

/// Multi-line detail view of one user.
pub fn format_user_details(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", user.display_name());

    let field = |out: &mut String, label: &str, value: Option<&str>| {
        let _ = writeln!(out, "  {label:<10} {}", or_missing(value));
    };

    let id = user.id.map(|id| id.to_string());
    field(&mut out, "id", id.as_deref());
    field(&mut out, "username", user.username.as_deref());
    field(&mut out, "email", user.email.as_deref());
    field(&mut out, "phone", user.phone.as_deref());
    field(&mut out, "website", user.website.as_deref());

    let address = user.address.as_ref().map(|address| {
        [
            address.street.as_deref(),
            address.suite.as_deref(),
            address.city.as_deref(),
            address.zipcode.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    });
    field(&mut out, "address", address.as_deref());

    let geo = user
        .address
        .as_ref()
        .and_then(|address| address.geo.as_ref())
        .map(|geo| {
            format!(
                "{}, {}",
                or_missing(geo.lat.as_deref()),
                or_missing(geo.lng.as_deref())
            )
        });
    field(&mut out, "geo", geo.as_deref());

    let company = user.company.as_ref();
    field(&mut out, "company", company.and_then(|c| c.name.as_deref()));
    field(
        &mut out,
        "motto",
        company.and_then(|c| c.catch_phrase.as_deref()),
    );
    out
}
