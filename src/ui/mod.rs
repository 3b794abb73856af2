/// UI rendering module
///
/// This module contains the interactive page canvas. Panel layout and
/// widgets live in main.rs; everything drawn with canvas geometry is here.

pub mod page;
