mod course;
mod enrollment;
mod lesson;

pub use self::course::CourseRepository;
pub use self::enrollment::EnrollmentRepository;
pub use self::lesson::LessonRepository;
