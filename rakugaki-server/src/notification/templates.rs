//! Email bodies for a newly created reservation

use shared::Reservation;

use super::OutgoingEmail;
use crate::utils::html::escape;
use crate::utils::time::{format_display_date, format_received_at};

pub const CONFIRMATION_SUBJECT: &str = "Reservation Confirmation - Rakugaki";
pub const OPERATOR_SUBJECT: &str = "New Reservation - Rakugaki";

/// Confirmation sent to the guest who booked
pub fn confirmation_email(sender: &str, reservation: &Reservation) -> OutgoingEmail {
    let name = escape(&reservation.name);
    let date = escape(&format_display_date(&reservation.date));
    let time = escape(&reservation.time);
    let guests = escape(&reservation.guests.to_string());
    let requests_line = if reservation.has_special_requests() {
        format!(
            "<p><strong>Special Requests:</strong> {}</p>",
            escape(reservation.requests_or_default())
        )
    } else {
        String::new()
    };

    let html_body = format!(
        r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #d4af37;">Reservation Confirmed</h2>
  <p>Thank you for your reservation at Rakugaki. We're looking forward to serving you!</p>

  <div style="background-color: #f9f9f9; padding: 20px; border-radius: 5px; border-left: 4px solid #d4af37;">
    <h3 style="color: #333; margin-top: 0;">Reservation Details:</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Date:</strong> {date}</p>
    <p><strong>Time:</strong> {time}</p>
    <p><strong>Number of Guests:</strong> {guests}</p>
    {requests_line}
  </div>

  <p>If you need to modify or cancel your reservation, please contact us at least 2 hours in advance.</p>

  <p>We look forward to serving you!</p>
  <p>The Rakugaki Team</p>
  <hr>
  <p style="color: #666; font-size: 12px;">
    Rakugaki Japanese Restaurant<br>
    123 Sakura Street, Tokyo<br>
    +81 3 1234 5678 | info@rakugaki.com
  </p>
</div>
"#
    );

    OutgoingEmail {
        from: sender.to_string(),
        to: reservation.email.clone(),
        subject: CONFIRMATION_SUBJECT.to_string(),
        html_body,
    }
}

/// Notice sent to the restaurant's own inbox (the sender address)
pub fn operator_email(sender: &str, reservation: &Reservation) -> OutgoingEmail {
    let html_body = format!(
        r#"
<div style="font-family: Arial, sans-serif;">
  <h2 style="color: #d4af37;">New Reservation Received</h2>

  <div style="background-color: #f5f5f5; padding: 15px; border-radius: 5px;">
    <h3 style="margin-top: 0;">Reservation Details:</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Date:</strong> {date}</p>
    <p><strong>Time:</strong> {time}</p>
    <p><strong>Guests:</strong> {guests}</p>
    <p><strong>Special Requests:</strong> {requests}</p>
    <p><strong>Reservation ID:</strong> {id}</p>
    <p><strong>Received:</strong> {received}</p>
  </div>
</div>
"#,
        name = escape(&reservation.name),
        email = escape(&reservation.email),
        phone = escape(&reservation.phone),
        date = escape(&format_display_date(&reservation.date)),
        time = escape(&reservation.time),
        guests = escape(&reservation.guests.to_string()),
        requests = escape(reservation.requests_or_default()),
        id = reservation.id,
        received = format_received_at(&reservation.created_at),
    );

    OutgoingEmail {
        from: sender.to_string(),
        to: sender.to_string(),
        subject: OPERATOR_SUBJECT.to_string(),
        html_body,
    }
}
