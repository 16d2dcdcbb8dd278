mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod protected;
pub use protected::Protected;

mod dashboard;
pub use dashboard::Dashboard;

mod add_task;
pub use add_task::AddTask;

mod task_detail;
pub use task_detail::TaskDetail;

mod not_found;
pub use not_found::NotFound;
