mod course;
mod enrollment;
mod lesson;

pub use self::course::{CourseRepositoryTrait, DynCourseRepository};
pub use self::enrollment::{DynEnrollmentRepository, EnrollmentRepositoryTrait};
pub use self::lesson::{DynLessonRepository, LessonRepositoryTrait};
