mod tests_batch;
