mod calculator_flow;
mod persistence;
