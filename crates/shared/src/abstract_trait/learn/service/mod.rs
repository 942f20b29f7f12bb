mod course;
mod enrollment;

pub use self::course::{CourseServiceTrait, DynCourseService};
pub use self::enrollment::{DynEnrollmentService, EnrollmentServiceTrait};
