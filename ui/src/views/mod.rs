mod page;
pub use page::ViewPage;
