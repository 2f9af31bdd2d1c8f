mod get_all_flights;
mod upload_and_parse;
