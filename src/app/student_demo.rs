use crate::adapters::database::DatabaseConnection;
use std::io::{self, Write};

pub const UPDATE_STUDENT_SQL: &str = "UPDATE students
SET email = 'newemail@example.com', phone = '01234567890'
WHERE student_id = 1;
";

pub const LIST_STUDENTS_SQL: &str = "SELECT * FROM students;";

/// Updates student 1, reports the outcome, then lists every student.
/// Returns the number of rows the update touched.
pub async fn run_student_demo(db: &DatabaseConnection, out: &mut dyn Write) -> io::Result<u64> {
    writeln!(out, "Cập nhật thông tin sinh viên:")?;
    let rows_affected = db.update(UPDATE_STUDENT_SQL).await;

    if rows_affected > 0 {
        writeln!(
            out,
            "Cập nhật sinh viên thành công. Số hàng bị ảnh hưởng: {}",
            rows_affected
        )?;
    } else {
        writeln!(out, "Cập nhật sinh viên thất bại.")?;
    }

    writeln!(out, "Danh sách sinh viên:")?;
    db.query(LIST_STUDENTS_SQL, out).await;
    Ok(rows_affected)
}
