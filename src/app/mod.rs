// Application layer: the demo flows wired on top of core and adapters.

pub mod student_demo;
