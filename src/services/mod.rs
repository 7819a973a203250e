pub mod checker;
pub mod dispatcher;
pub mod exercise_resolver;
pub mod finalizer;
pub mod param_resolver;
pub mod result_writer;
pub mod summary_printer;

pub use checker::Checker;
pub use dispatcher::AnalyzerDispatcher;
pub use exercise_resolver::{ExerciseLocation, ExerciseResolver};
pub use finalizer::Finalizer;
pub use param_resolver::ParamResolver;
pub use result_writer::ResultWriter;
pub use summary_printer::SummaryPrinter;
