mod all;
mod confirm;
mod footer;
mod log;
mod main;
mod messages;
mod page_not_found;
mod product_detail;
mod product_edit;
mod product_list;
mod welcome;

use self::log::log;
use super::*;
use confirm::confirm;
use footer::footer;
use main::main;
use messages::messages;

pub use all::all as render;
