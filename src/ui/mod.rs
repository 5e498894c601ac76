//! UI 模块
//! 终端预览界面的各个组件

mod help_popup;
mod layout;
mod ring;
mod spinner;
mod status_bar;

pub use help_popup::*;
pub use layout::*;
pub use ring::*;
pub use spinner::*;
pub use status_bar::*;
