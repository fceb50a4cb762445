mod test_pkcs7;
