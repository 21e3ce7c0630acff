mod detail;
mod map;
mod prompt;
mod results;

pub use detail::render_detail;
pub use map::{MapContext, pin_position, render_map};
pub use prompt::{InputContext, render_input_with_tabs};
pub use results::{ResultsContext, render_results};
