pub mod a001_upload_form;
