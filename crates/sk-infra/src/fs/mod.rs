mod app_data_dir;
mod app_dirs_adapter;

pub use app_data_dir::app_data_dir;
pub use app_dirs_adapter::DirsAppDirsAdapter;
