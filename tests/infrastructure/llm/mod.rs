mod chat_completion_client_test;
mod llm_summarizer_test;
