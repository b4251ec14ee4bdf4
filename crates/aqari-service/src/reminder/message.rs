//! The reminder message template.

use chrono::NaiveDate;

/// Build the ten-line WhatsApp reminder body.
///
/// Field order is fixed: greeting, reminder sentence, blank line,
/// invoice number, amount (three decimals, KWD), due date, blank line,
/// two closing sentences, signature.
pub fn build_reminder_message(
    tenant_name: &str,
    invoice_number: &str,
    amount: f64,
    due_date: NaiveDate,
) -> String {
    format!(
        "Dear {tenant_name},\n\
         This is a friendly reminder that your rent payment is due soon.\n\
         \n\
         Invoice: {invoice_number}\n\
         Amount: {amount:.3} KWD\n\
         Due Date: {due_date}\n\
         \n\
         Please arrange payment before the due date.\n\
         Thank you for your cooperation.\n\
         Property Management"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_template() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let msg = build_reminder_message("Jane Doe", "INV-2024-0001", 125.5, due);
        let expected = "Dear Jane Doe,\n\
             This is a friendly reminder that your rent payment is due soon.\n\
             \n\
             Invoice: INV-2024-0001\n\
             Amount: 125.500 KWD\n\
             Due Date: 2024-03-01\n\
             \n\
             Please arrange payment before the due date.\n\
             Thank you for your cooperation.\n\
             Property Management";
        assert_eq!(msg, expected);
        assert_eq!(msg.lines().count(), 10);
    }

    #[test]
    fn test_amount_fixed_to_three_decimals() {
        let due = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let msg = build_reminder_message("Ali", "INV-2024-0042", 300.0, due);
        assert!(msg.contains("Amount: 300.000 KWD"));
    }
}
