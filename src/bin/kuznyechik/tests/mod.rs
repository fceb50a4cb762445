mod test_output_path;
