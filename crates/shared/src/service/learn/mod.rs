mod course;
mod enrollment;

pub use self::course::CourseService;
pub use self::enrollment::EnrollmentService;
