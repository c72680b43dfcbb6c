//! Static demo data served by the fixture repository.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use crate::model::*;

/// A demo login: the public user record plus its password.
#[derive(Clone, Debug)]
pub struct Account {
    pub user: User,
    pub password: &'static str,
}

#[must_use]
pub fn accounts() -> Vec<Account> {
    vec![
        Account {
            user: User {
                id: 1,
                username: "student1".into(),
                role: Role::Student,
                name: "Ravi Kumar".into(),
                email: "ravi.kumar@svit.edu.in".into(),
                roll_number: Some("SVIT20CS101".into()),
                branch: Some("CSE".into()),
                semester: Some(3),
                department: None,
                profile_image: "/assets/images/student-avatar.png".into(),
            },
            password: "password123",
        },
        Account {
            user: User {
                id: 2,
                username: "admin1".into(),
                role: Role::Admin,
                name: "Dr. Srinivas Reddy".into(),
                email: "srinivas.reddy@svit.edu.in".into(),
                roll_number: None,
                branch: None,
                semester: None,
                department: Some("Administration".into()),
                profile_image: "/assets/images/admin-avatar.png".into(),
            },
            password: "admin123",
        },
    ]
}

// =============================================================================
// STUDENT
// =============================================================================

fn payment(id: &str, fee_type: &str, amount: u64, paid_date: &str, mode: &str, reference: &str) -> Payment {
    Payment {
        id: id.into(),
        fee_type: fee_type.into(),
        semester: 2,
        amount,
        paid_date: paid_date.into(),
        payment_mode: mode.into(),
        reference: reference.into(),
        status: PaymentStatus::Success,
    }
}

#[must_use]
pub fn payments() -> Vec<Payment> {
    vec![
        payment("SVIT25011501", "Examination Fee", 2500, "2025-01-15", "Online (UPI)", "UPI123456789"),
        payment("SVIT25011002", "Bus Fee", 8000, "2025-01-10", "Online (Net Banking)", "NB987654321"),
        payment("SVIT24122803", "Hostel Fee", 25000, "2024-12-28", "DD", "DD123456"),
    ]
}

/// Payable fees with their convenience fee. The first three are what the
/// student currently owes; the lab fee is only reachable by id.
#[must_use]
pub fn fee_details() -> Vec<FeeDetails> {
    let fee = |id, fee_type: &str, amount, due_date: &str, status, description: &str, late_charge, convenience_fee| {
        FeeDetails {
            fee: PendingFee {
                id,
                fee_type: fee_type.into(),
                semester: 3,
                amount,
                due_date: due_date.into(),
                status,
                description: description.into(),
                late_charge,
            },
            convenience_fee,
        }
    };
    vec![
        fee(1, "Examination Fee", 2500, "2025-04-15", FeeStatus::Pending, "Mid-semester examination fee", 0, 25),
        fee(2, "Bus Fee", 8000, "2025-04-10", FeeStatus::Pending, "Transportation fee for April-June 2025", 0, 80),
        fee(3, "Library Fee", 1000, "2025-03-30", FeeStatus::Overdue, "Annual library access fee", 100, 10),
        fee(4, "Lab Fee", 3500, "2025-05-20", FeeStatus::Pending, "Computer lab usage fee", 0, 35),
    ]
}

#[must_use]
pub fn pending_fees() -> Vec<PendingFee> {
    fee_details().into_iter().take(3).map(|d| d.fee).collect()
}

#[must_use]
pub fn receipts() -> Vec<Receipt> {
    vec![Receipt {
        id: "SVIT25011501".into(),
        student_name: "Ravi Kumar".into(),
        roll_number: "SVIT20CS101".into(),
        fee_type: "Examination Fee".into(),
        semester: 2,
        amount: 2500,
        convenience_fee: 25,
        late_charge: 0,
        total_amount: 2525,
        paid_date: "2025-01-15 09:30:22".into(),
        academic_year: "2024-2025".into(),
        payment_mode: "Online (UPI)".into(),
        transaction_id: "UPI123456789".into(),
        payment_status: PaymentStatus::Success,
    }]
}

#[must_use]
pub fn profile() -> StudentProfile {
    StudentProfile {
        id: 1,
        name: "Ravi Kumar".into(),
        roll_number: "SVIT20CS101".into(),
        email: "ravi.kumar@svit.edu.in".into(),
        phone: "9876543210".into(),
        branch: "Computer Science & Engineering".into(),
        semester: 3,
        section: "A".into(),
        batch_year: "2020-2024".into(),
        address: "123 Main Street, Hyderabad, Telangana, 500001".into(),
        father_name: "Ramesh Kumar".into(),
        mother_name: "Lakshmi Devi".into(),
        guardian_phone: "9876543211".into(),
        blood_group: "O+".into(),
        dob: "2002-05-15".into(),
        admission_year: "2020".into(),
        hostel_resident: "No".into(),
        bus_route: "Route 7 - Hyderabad Central".into(),
        scholarship_status: "None".into(),
        profile_image: "/assets/images/student-avatar.png".into(),
    }
}

// =============================================================================
// ADMIN
// =============================================================================

#[must_use]
pub fn dashboard_summary() -> DashboardSummary {
    DashboardSummary {
        total_collected: 7_250_000,
        pending_amount: 1_850_000,
        overdue_amount: 950_000,
        total_students: 2500,
        paid_students: 1875,
        pending_students: 625,
        overdue_students: 320,
        collection_rate: 75,
    }
}

#[must_use]
pub fn monthly_trends() -> Vec<MonthlyTrend> {
    [("Jan", 980_000), ("Feb", 1_150_000), ("Mar", 1_250_000), ("Apr", 950_000), ("May", 1_100_000), ("Jun", 1_320_000)]
        .into_iter()
        .map(|(month, collected)| MonthlyTrend { month: month.into(), collected, target: 1_200_000 })
        .collect()
}

#[must_use]
pub fn recent_payments() -> Vec<RecentPayment> {
    transactions().iter().take(3).map(RecentPayment::from).collect()
}

#[must_use]
pub fn students() -> Vec<StudentRecord> {
    let student = |id, name: &str, roll: &str, branch: &str, semester, email: &str, phone: &str, fees: (u64, u64), last: &str| {
        StudentRecord {
            id,
            name: name.into(),
            roll_number: roll.into(),
            branch: branch.into(),
            semester,
            email: email.into(),
            phone: phone.into(),
            total_fees: fees.0,
            paid_fees: fees.1,
            pending_fees: fees.0 - fees.1,
            last_payment_date: last.into(),
        }
    };
    vec![
        student(1, "Ravi Kumar", "SVIT20CS101", "CSE", 3, "ravi.kumar@svit.edu.in", "9876543210", (35000, 27000), "2025-01-15"),
        student(2, "Priya Sharma", "SVIT21ECE078", "ECE", 2, "priya.sharma@svit.edu.in", "9876543211", (32000, 24000), "2025-01-10"),
        student(3, "Mohammed Ali", "SVIT22ME045", "MECH", 1, "mohammed.ali@svit.edu.in", "9876543212", (30000, 15000), "2024-12-05"),
        student(4, "Kiran Reddy", "SVIT20CS087", "CSE", 3, "kiran.reddy@svit.edu.in", "9876543213", (35000, 35000), "2025-01-20"),
        student(5, "Anjali Patel", "SVIT21CIVIL034", "CIVIL", 2, "anjali.patel@svit.edu.in", "9876543214", (30000, 15000), "2024-12-12"),
    ]
}

#[must_use]
pub fn fee_structures() -> Vec<FeeStructure> {
    let structure = |id, fee_type: &str, amount, due_date: &str, description: &str, late_charge| FeeStructure {
        id,
        fee_type: fee_type.into(),
        branch: ALL.into(),
        semester: ALL.into(),
        amount,
        due_date: due_date.into(),
        description: description.into(),
        is_active: true,
        late_charge,
        created_on: "2025-02-15".into(),
    };
    vec![
        structure(1, "Examination Fee", 2500, "2025-04-15", "Mid-semester examination fee", 100),
        structure(2, "Bus Fee", 8000, "2025-04-10", "Transportation fee for April-June 2025", 200),
        structure(3, "Library Fee", 1000, "2025-03-30", "Annual library access fee", 50),
    ]
}

/// The payment-tracking ledger, newest first.
#[must_use]
pub fn transactions() -> Vec<Transaction> {
    use PaymentStatus::{Failed, Pending, Success};

    let tx = |id: &str, who: (&str, &str, &str, u32), fee_type: &str, amount, date: &str, mode: &str, reference: &str, status| {
        Transaction {
            id: id.into(),
            student_name: who.0.into(),
            roll_number: who.1.into(),
            branch: who.2.into(),
            semester: who.3,
            fee_type: fee_type.into(),
            amount,
            date: date.into(),
            mode: mode.into(),
            reference: reference.into(),
            status,
        }
    };
    vec![
        tx("SVIT25032001", ("Ravi Kumar", "SVIT20CS101", "CSE", 3), "Examination Fee", 2500, "2025-03-20 09:45:23", "Online (UPI)", "UPI123456789", Success),
        tx("SVIT25031902", ("Priya Sharma", "SVIT21ECE078", "ECE", 2), "Bus Fee", 8000, "2025-03-19 14:23:10", "Online (Card)", "CARD654321", Success),
        tx("SVIT25031903", ("Mohammed Ali", "SVIT22ME045", "MECH", 1), "Lab Fee", 3500, "2025-03-19 11:05:47", "Cash", "CASH789012", Success),
        tx("SVIT25031804", ("Kiran Reddy", "SVIT20CS087", "CSE", 3), "Library Fee", 1000, "2025-03-18 15:30:22", "Online (Net Banking)", "NB345678", Success),
        tx("SVIT25031805", ("Anjali Patel", "SVIT21CIVIL034", "CIVIL", 2), "Hostel Fee", 25000, "2025-03-18 10:12:55", "DD", "DD567890", Pending),
        tx("SVIT25031806", ("Srinivas Kumar", "SVIT22EEE076", "EEE", 1), "Examination Fee", 2500, "2025-03-18 09:22:14", "Online (UPI)", "UPI654789", Failed),
        tx("SVIT25031707", ("Lakshmi Devi", "SVIT20ECE045", "ECE", 4), "Lab Fee", 4000, "2025-03-17 16:45:30", "Online (Card)", "CARD123789", Success),
        tx("SVIT25031708", ("Rajesh Singh", "SVIT21ME034", "MECH", 2), "Bus Fee", 8000, "2025-03-17 14:10:05", "Cash", "CASH234567", Success),
        tx("SVIT25031609", ("Priyanka Reddy", "SVIT20CIVIL089", "CIVIL", 3), "Hostel Fee", 25000, "2025-03-16 11:30:45", "DD", "DD890123", Success),
        tx("SVIT25031610", ("Suresh Kumar", "SVIT22CS023", "CSE", 1), "Library Fee", 1000, "2025-03-16 10:15:20", "Online (UPI)", "UPI901234", Pending),
    ]
}

// =============================================================================
// PICK LISTS
// =============================================================================

pub const FEE_TYPES: [&str; 5] = ["Examination Fee", "Bus Fee", "Hostel Fee", "Library Fee", "Lab Fee"];
pub const BRANCHES: [&str; 5] = ["CSE", "ECE", "MECH", "CIVIL", "EEE"];
pub const SEMESTERS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "1-2", "3-8"];
pub const PAYMENT_MODES: [&str; 5] = ["Online (UPI)", "Online (Card)", "Online (Net Banking)", "Cash", "DD"];
pub const BANKS: [&str; 10] = [
    "State Bank of India",
    "HDFC Bank",
    "ICICI Bank",
    "Axis Bank",
    "Kotak Mahindra Bank",
    "Punjab National Bank",
    "Bank of Baroda",
    "Canara Bank",
    "IDFC First Bank",
    "Other Bank",
];
