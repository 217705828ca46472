//! Operator view of all reservations (`GET /admin`)

use std::fmt::Write;

use shared::Reservation;

use crate::utils::html::escape;
use crate::utils::time::{format_display_date, format_received_at};

const STYLE: &str = r#"
    body {
      font-family: 'Arial', sans-serif;
      margin: 40px;
      background-color: #0a0a0a;
      color: #f5f5f5;
    }
    h1 {
      color: #d4af37;
      border-bottom: 2px solid #d4af37;
      padding-bottom: 10px;
    }
    table {
      border-collapse: collapse;
      width: 100%;
      margin-top: 20px;
      background-color: #1a1a1a;
    }
    th, td {
      border: 1px solid #333;
      padding: 12px;
      text-align: left;
    }
    th {
      background-color: #2a2a2a;
      color: #d4af37;
    }
    tr:nth-child(even) {
      background-color: #252525;
    }
"#;

/// Render the reservations table, in the order given
pub fn render_admin_view(reservations: &[Reservation]) -> String {
    let mut rows = String::new();
    for r in reservations {
        // writing into a String cannot fail
        let _ = write!(
            rows,
            "
        <tr>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
        </tr>",
            r.id,
            escape(&r.name),
            escape(&r.email),
            escape(&format_display_date(&r.date)),
            escape(&r.time),
            escape(&r.guests.to_string()),
            format_received_at(&r.created_at),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Rakugaki Admin</title>
  <style>{STYLE}</style>
</head>
<body>
  <h1>Rakugaki Reservations</h1>
  <p>Total reservations: {total}</p>
  <table>
    <thead>
      <tr>
        <th>ID</th>
        <th>Name</th>
        <th>Email</th>
        <th>Date</th>
        <th>Time</th>
        <th>Guests</th>
        <th>Received</th>
      </tr>
    </thead>
    <tbody>{rows}
    </tbody>
  </table>
</body>
</html>
"#,
        total = reservations.len(),
    )
}
